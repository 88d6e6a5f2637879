// src/tests/router_tests/criteria_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{catalog_json, loaded_app, post};
use astra::Body;
use http::{Method, Request};

fn detail_home_ids(json: &serde_json::Value) -> Vec<String> {
    json["detail"]["homes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn type_filter_narrows_open_detail() {
    let app = loaded_app();
    post(&app, "/select", "id=c1");
    post(&app, "/criteria", "type=Condo");

    let json = catalog_json(&app);
    assert_eq!(detail_home_ids(&json), vec!["h2"]);
}

#[test]
fn price_bounds_are_inclusive() {
    let app = loaded_app();
    post(&app, "/select", "id=c1");
    post(
        &app,
        "/criteria",
        "type=&price_min=200000&price_max=300000&area_min=900&area_max=1500",
    );

    let json = catalog_json(&app);
    assert_eq!(detail_home_ids(&json), vec!["h1", "h2"]);
}

#[test]
fn inverted_range_is_reordered() {
    let app = loaded_app();
    post(&app, "/select", "id=c1");
    post(&app, "/criteria", "price_min=250000&price_max=100000");

    let json = catalog_json(&app);
    assert_eq!(json["criteria"]["price"]["min"], 100000.0);
    assert_eq!(json["criteria"]["price"]["max"], 250000.0);
    assert_eq!(detail_home_ids(&json), vec!["h1"]);
}

#[test]
fn out_of_range_values_are_clamped() {
    let app = loaded_app();
    post(&app, "/criteria", "area_min=-50&area_max=999999");

    let json = catalog_json(&app);
    assert_eq!(json["criteria"]["area"]["min"], 0.0);
    assert_eq!(json["criteria"]["area"]["max"], 5000.0);
}

#[test]
fn single_bound_keeps_full_range_for_the_other() {
    let app = loaded_app();
    post(&app, "/criteria", "price_min=250000");

    let json = catalog_json(&app);
    assert_eq!(json["criteria"]["price"]["min"], 250000.0);
    assert_eq!(json["criteria"]["price"]["max"], 1000000.0);
}

#[test]
fn non_numeric_bound_is_bad_request() {
    let app = loaded_app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/criteria")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(b"price_min=cheap".to_vec()))
        .unwrap();

    assert!(matches!(handle(req, &app), Err(ServerError::BadRequest(_))));
}
