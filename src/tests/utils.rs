use crate::catalog::{CatalogEvent, CatalogStore};
use crate::config::CatalogConfig;
use crate::domain::{Community, Home};
use crate::router::{handle, App};
use astra::{Body, Response};
use http::{Method, Request};
use serde_json::Value;
use std::io::Read;
use std::sync::Arc;

pub const COMMUNITIES_JSON: &str = r#"[
    {"id": "c1", "name": "Oak", "imgUrl": "https://img.example/oak.jpg", "group": "North"},
    {"id": "c2", "name": "Elm", "imgUrl": "", "group": "South"}
]"#;

pub const HOMES_JSON: &str = r#"[
    {"id": "h1", "communityId": "c1", "type": "House", "price": 200000, "area": 1500},
    {"id": "h2", "communityId": "c1", "type": "Condo", "price": 300000, "area": 900},
    {"id": "h3", "communityId": "gone", "type": "Duplex", "price": 100000, "area": 1000}
]"#;

/// App whose store already holds the fixture collections.
pub fn loaded_app() -> App {
    let communities: Vec<Community> = serde_json::from_str(COMMUNITIES_JSON).unwrap();
    let homes: Vec<Home> = serde_json::from_str(HOMES_JSON).unwrap();

    let store = Arc::new(CatalogStore::default());
    store.dispatch(CatalogEvent::CommunitiesLoaded(Ok(communities)));
    store.dispatch(CatalogEvent::HomesLoaded(Ok(homes)));

    App {
        store,
        config: CatalogConfig::default(),
    }
}

pub fn get(app: &App, uri: &str) -> Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    handle(req, app).expect("Handler failed")
}

/// Submits `form` as an urlencoded POST body.
pub fn post(app: &App, uri: &str, form: &str) -> Response {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.as_bytes().to_vec()))
        .unwrap();
    handle(req, app).expect("Handler failed")
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn catalog_json(app: &App) -> Value {
    let resp = get(app, "/api/catalog");
    assert_eq!(resp.status(), 200);
    serde_json::from_str(&body_string(resp)).unwrap()
}
