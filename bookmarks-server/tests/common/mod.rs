//! Shared fixtures for endpoint tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use bookmarks_server::models::{NewBookmark, Rating, WebUrl};
use bookmarks_server::{build_router, AppState, BookmarkResponse, MemoryStore, ServerConfig};
use serde_json::Value;
use tower::ServiceExt;

fn new_bookmark(title: &str, url: &str, description: &str, rating: i64) -> NewBookmark {
    NewBookmark {
        title: title.to_owned(),
        url: WebUrl::new(url).unwrap(),
        description: description.to_owned(),
        rating: Rating::new(rating).unwrap(),
    }
}

/// Bookmarks seeded into the store for "given the store has data" tests.
pub fn make_bookmarks_array() -> Vec<NewBookmark> {
    vec![
        new_bookmark("Google", "https://www.google.com", "Where we find everything else", 4),
        new_bookmark("Thinkful", "https://www.thinkful.com", "Think outside the classroom", 5),
        new_bookmark("Github", "https://www.github.com", "Brings together the world's largest community of developers", 4),
        new_bookmark("MDN", "https://developer.mozilla.org", "The only place to find web documentation", 5),
    ]
}

/// The fixtures as the API should return them, ids assigned from 1.
pub fn expected_bookmarks() -> Vec<BookmarkResponse> {
    make_bookmarks_array()
        .into_iter()
        .zip(1..)
        .map(|(b, id)| BookmarkResponse::from(b.into_bookmark(id)))
        .collect()
}

pub fn app_with(store: Arc<MemoryStore>) -> Router {
    build_router(AppState::new(store), &ServerConfig::default())
}

pub fn empty_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (app_with(store.clone()), store)
}

pub fn seeded_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::with_bookmarks(make_bookmarks_array()));
    (app_with(store.clone()), store)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap()
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(
        app,
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn send_json(app: &Router, method: &str, uri: &str, body: &Value) -> TestResponse {
    send(
        app,
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}
