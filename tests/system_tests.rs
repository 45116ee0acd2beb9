//! Integration tests for health checks, metrics, and fixture management.

mod common;

use axum::http::StatusCode;
use common::TestApp;

#[tokio::test]
async fn test_health_live() {
    let app = TestApp::spawn().await;

    let res = app.get("/api/v1/system/health/live").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "success");
    assert_eq!(res.body["data"]["status"], "alive");
}

#[tokio::test]
async fn test_health_ready() {
    let app = TestApp::spawn().await;

    let res = app.get("/api/v1/system/health/ready").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["data"]["ready"], true);
    assert_eq!(res.body["data"]["checks"]["database"], true);
}

#[tokio::test]
async fn test_metrics_without_recorder() {
    let app = TestApp::spawn().await;

    let res = app.get("/api/v1/metrics").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.text, "Metrics not enabled or failed to initialize");
}

#[tokio::test]
async fn test_metrics_render_request_counters() {
    let handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("only this test installs the global recorder");
    let app = TestApp::spawn_with_metrics(Some(handle)).await;

    let res = app.get("/api/v1/movies").await;
    assert_eq!(res.status, StatusCode::OK);

    let res = app.get("/api/v1/metrics").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.text.contains("http_requests_total"), "{}", res.text);
    assert!(
        res.text.contains("http_request_duration_seconds"),
        "{}",
        res.text
    );
}

#[tokio::test]
async fn test_reset_restores_fixtures() {
    let app = TestApp::spawn().await;

    app.delete("/api/v1/movies/1").await;
    app.delete("/api/v1/movies/2").await;
    assert_eq!(app.store.count_movies().await.unwrap(), 1);

    let seeded = app.store.reset().await.unwrap();
    assert_eq!(seeded, 3);

    let movies = app.store.list_movies().await.unwrap();
    let names: Vec<&str> = movies.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "The Land Before Time",
            "Jurassic Park",
            "Ice Age: Dawn of the Dinosaurs"
        ]
    );
    assert_eq!(movies[0].id, 1);
}

#[tokio::test]
async fn test_seed_replaces_existing_rows() {
    let app = TestApp::spawn().await;

    app.post_json(
        "/api/v1/movies",
        serde_json::json!({ "name": "Heat", "genre": "Crime", "rating": 8, "explicit": true }),
    )
    .await;
    assert_eq!(app.store.count_movies().await.unwrap(), 4);

    app.store.seed().await.unwrap();
    assert_eq!(app.store.count_movies().await.unwrap(), 3);
}

#[tokio::test]
async fn test_migration_status_reports_applied() {
    let app = TestApp::spawn().await;

    let states = app.store.migration_status().await.unwrap();

    assert_eq!(states.len(), 1);
    assert!(states[0].applied);
    assert_eq!(states[0].name, "m20240101_create_movies");
}
