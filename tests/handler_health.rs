mod common;

#[tokio::test]
async fn test_health_returns_literal_body() {
    let server = common::test_server("development");

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], "1.0.0");
    assert_eq!(json["environment"], "development");
}

#[tokio::test]
async fn test_health_and_api_health_are_identical() {
    let server = common::test_server("development");

    let plain = server.get("/health").await;
    let api = server.get("/api/health").await;

    plain.assert_status_ok();
    api.assert_status_ok();

    assert_eq!(
        plain.json::<serde_json::Value>(),
        api.json::<serde_json::Value>()
    );
}

#[tokio::test]
async fn test_health_reflects_startup_environment() {
    let server = common::test_server("production");

    let json = server.get("/api/health").await.json::<serde_json::Value>();

    assert_eq!(json["environment"], "production");
}

#[tokio::test]
async fn test_health_body_has_no_extra_fields() {
    let server = common::test_server("development");

    let json = server.get("/health").await.json::<serde_json::Value>();

    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 3);
    assert!(object.contains_key("status"));
    assert!(object.contains_key("version"));
    assert!(object.contains_key("environment"));
}
