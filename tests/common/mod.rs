//! Shared fixture for integration tests.
//!
//! Every [`TestApp`] owns a private SQLite file that is rolled back, migrated,
//! and seeded on creation and deleted when the value is dropped, so each test
//! starts from the same three fixture rows regardless of how the previous one
//! ended.

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use cinedex::config::Config;
use cinedex::db::Store;
use http_body_util::BodyExt;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub store: Store,
    db_path: PathBuf,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
    pub text: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_metrics(None).await
    }

    pub async fn spawn_with_metrics(prometheus_handle: Option<PrometheusHandle>) -> Self {
        let db_path =
            std::env::temp_dir().join(format!("cinedex-test-{}.db", uuid::Uuid::new_v4()));

        let mut config = Config::default();
        config.general.database_path = format!("sqlite:{}", db_path.display());

        let state = cinedex::api::create_app_state_from_config(config, prometheus_handle)
            .await
            .expect("Failed to create app state");

        let store = state.store().clone();
        store.reset().await.expect("Failed to reset fixtures");

        Self {
            router: cinedex::api::router(state),
            store,
            db_path,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body.to_string())).await
    }

    pub async fn put_json(&self, uri: &str, body: serde_json::Value) -> TestResponse {
        self.send(Method::PUT, uri, Some(body.to_string())).await
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<String>) -> TestResponse {
        let content_type = body.as_ref().map(|_| "application/json");
        send_request(self.router.clone(), method, uri, body, content_type).await
    }

    /// Sends `body` with an explicit `Content-Type`, or none at all.
    pub async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        body: &str,
        content_type: Option<&str>,
    ) -> TestResponse {
        send_request(
            self.router.clone(),
            method,
            uri,
            Some(body.to_string()),
            content_type,
        )
        .await
    }
}

/// Drives one request through `router`. Free-standing so spawned tasks can
/// share a cloned router.
pub async fn send_request(
    router: Router,
    method: Method,
    uri: &str,
    body: Option<String>,
    content_type: Option<&str>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let body = body.map_or_else(Body::empty, Body::from);

    let response = router.oneshot(builder.body(body).unwrap()).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    TestResponse {
        status,
        content_type,
        body,
        text: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm", "-journal"] {
            let mut path = self.db_path.clone().into_os_string();
            path.push(suffix);
            std::fs::remove_file(path).ok();
        }
    }
}

impl TestResponse {
    pub fn assert_json(&self) {
        assert_eq!(self.content_type.as_deref(), Some("application/json"));
    }

    pub fn data(&self) -> &Vec<serde_json::Value> {
        self.body["data"].as_array().expect("data should be an array")
    }
}

pub fn assert_movie_keys(movie: &serde_json::Value) {
    for key in ["id", "name", "genre", "rating", "explicit"] {
        assert!(movie.get(key).is_some(), "movie is missing key {key}: {movie}");
    }
}
