mod common;

use serde_json::json;

#[tokio::test]
async fn test_ping_returns_fixture_sample() {
    let server = common::test_server("development");

    let response = server.get("/api/metrics/ping").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({"value": 35, "unit": "ms", "timestamp": "2025-05-05T12:00:00Z"})
    );
}

#[tokio::test]
async fn test_jitter_returns_fixture_sample() {
    let server = common::test_server("development");

    let response = server.get("/api/metrics/jitter").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({"value": 5, "unit": "ms", "timestamp": "2025-05-05T12:00:00Z"})
    );
}

#[tokio::test]
async fn test_system_returns_fixture_snapshot() {
    let server = common::test_server("development");

    let response = server.get("/api/metrics/system").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({"cpu": 45, "memory": 60, "gpu": 50, "timestamp": "2025-05-05T12:00:00Z"})
    );
}

#[tokio::test]
async fn test_metrics_are_deterministic_across_requests() {
    let server = common::test_server("development");

    let first = server.get("/api/metrics/ping").await.json::<serde_json::Value>();
    let second = server.get("/api/metrics/ping").await.json::<serde_json::Value>();

    assert_eq!(first, second);
}
