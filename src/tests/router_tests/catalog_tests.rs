// src/tests/router_tests/catalog_tests.rs

use crate::catalog::CatalogStore;
use crate::config::CatalogConfig;
use crate::router::{handle, App};
use crate::tests::utils::{body_string, catalog_json, get, loaded_app, post};
use astra::Body;
use http::{Method, Request};
use std::sync::Arc;

#[test]
fn catalog_page_lists_communities_by_name() {
    let app = loaded_app();
    let resp = get(&app, "/");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    let elm = body.find("community-c2").expect("Elm card missing");
    let oak = body.find("community-c1").expect("Oak card missing");
    assert!(elm < oak, "cards should be sorted by name");

    assert!(body.contains("Average Price: $250000.00"));
    assert!(body.contains("Average Price: N/A"));
    // Elm has no image and gets the fallback.
    assert!(body.contains(r#"src="/imgcomingsoon.jpg""#));
}

#[test]
fn pending_catalog_shows_loading() {
    let app = App {
        store: Arc::new(CatalogStore::default()),
        config: CatalogConfig::default(),
    };
    let body = body_string(get(&app, "/"));
    assert!(body.contains("Loading..."));
}

#[test]
fn api_catalog_matches_scenario() {
    let app = loaded_app();
    let json = catalog_json(&app);

    let communities = json["communities"].as_array().unwrap();
    assert_eq!(communities.len(), 2);
    assert_eq!(communities[0]["id"], "c2");
    assert_eq!(communities[0]["avgPrice"], "N/A");
    assert_eq!(communities[1]["id"], "c1");
    assert_eq!(communities[1]["avgPrice"], "$250000.00");

    // The orphaned home h3 is not listed anywhere.
    let listed: Vec<&str> = communities
        .iter()
        .flat_map(|c| c["homes"].as_array().unwrap())
        .map(|h| h["id"].as_str().unwrap())
        .collect();
    assert_eq!(listed, vec!["h1", "h2"]);
}

#[test]
fn group_route_filters_and_keeps_all_groups() {
    let app = loaded_app();

    let resp = post(&app, "/group", "group=North");
    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/"
    );

    let json = catalog_json(&app);
    let communities = json["communities"].as_array().unwrap();
    assert_eq!(communities.len(), 1);
    assert_eq!(communities[0]["name"], "Oak");
    assert_eq!(json["groups"], serde_json::json!(["North", "South"]));

    post(&app, "/group", "group=");
    assert_eq!(catalog_json(&app)["communities"].as_array().unwrap().len(), 2);
}

#[test]
fn group_select_marks_current_group() {
    let app = loaded_app();
    post(&app, "/group", "group=South");

    let body = body_string(get(&app, "/"));
    assert!(body.contains(r#"<option value="South" selected>South</option>"#));
}

#[test]
fn unknown_route_is_not_found() {
    let app = loaded_app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    assert!(matches!(
        handle(req, &app),
        Err(crate::errors::ServerError::NotFound)
    ));
}
