// src/tests/router_tests/selection_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, catalog_json, get, loaded_app, post};
use astra::Body;
use http::{Method, Request};

#[test]
fn select_opens_detail() {
    let app = loaded_app();
    let resp = post(&app, "/select", "id=c1");
    assert_eq!(resp.status(), 302);

    let json = catalog_json(&app);
    assert_eq!(json["selection"]["state"], "open");
    assert_eq!(json["detail"]["status"], "open");
    assert_eq!(json["detail"]["communityId"], "c1");

    let body = body_string(get(&app, "/"));
    assert!(body.contains("Price: $200,000"));
    assert!(body.contains("Price: $300,000"));
}

#[test]
fn select_unknown_id_stays_closed() {
    let app = loaded_app();
    post(&app, "/select", "id=nope");

    let json = catalog_json(&app);
    assert_eq!(json["selection"]["state"], "closed");
    assert_eq!(json["detail"]["status"], "closed");
}

#[test]
fn select_retargets_and_close_closes() {
    let app = loaded_app();
    post(&app, "/select", "id=c1");
    post(&app, "/select", "id=c2");
    assert_eq!(catalog_json(&app)["selection"]["communityId"], "c2");

    post(&app, "/close", "");
    assert_eq!(catalog_json(&app)["selection"]["state"], "closed");
}

#[test]
fn regrouping_leaves_selection_unresolved() {
    let app = loaded_app();
    post(&app, "/select", "id=c1");
    post(&app, "/group", "group=South");

    let json = catalog_json(&app);
    assert_eq!(json["selection"]["state"], "open");
    assert_eq!(json["selection"]["communityId"], "c1");
    assert_eq!(json["detail"]["status"], "unavailable");

    let body = body_string(get(&app, "/"));
    assert!(body.contains("Community unavailable"));
}

#[test]
fn select_without_id_is_bad_request() {
    let app = loaded_app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/select")
        .body(Body::empty())
        .unwrap();

    assert!(matches!(handle(req, &app), Err(ServerError::BadRequest(_))));
}

#[test]
fn state_changes_refuse_get() {
    let app = loaded_app();

    for uri in ["/select?id=c1", "/close", "/group?group=North", "/criteria?type=Condo"] {
        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        assert!(
            matches!(handle(req, &app), Err(ServerError::MethodNotAllowed)),
            "GET {uri} should be refused"
        );
    }

    let json = catalog_json(&app);
    assert_eq!(json["selection"]["state"], "closed");
    assert_eq!(json["criteria"]["group"], "");
    assert_eq!(json["communities"].as_array().unwrap().len(), 2);
}

#[test]
fn page_submits_state_changes_as_post_forms() {
    let app = loaded_app();
    let body = body_string(get(&app, "/"));
    assert!(body.contains(r#"action="/select" method="post""#));
    assert!(body.contains(r#"action="/group" method="post""#));
    assert!(!body.contains("/select?id="));

    post(&app, "/select", "id=c1");
    let body = body_string(get(&app, "/"));
    assert!(body.contains(r#"action="/close" method="post""#));
    assert!(body.contains(r#"action="/criteria" method="post""#));
}
