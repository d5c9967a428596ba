#![allow(dead_code)]

pub mod mongo;

use axum::body::Body;
use axum::http::Request;
use rental_api::{app, AppState};
use rental_catalog::seed;
use rental_store::InMemoryStore;
use std::sync::Arc;

/// Router over a freshly seeded in-memory store. The store handle is returned
/// so tests can add data or inspect writes.
pub async fn seeded_app() -> (axum::Router, InMemoryStore) {
    let store = InMemoryStore::new();
    seed::seed_sample_listings(&store).await.expect("seed");
    let state = AppState::new(Arc::new(store.clone()), Arc::new(store.clone()));
    (app(state), store)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request")
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}
