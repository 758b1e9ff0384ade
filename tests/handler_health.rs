mod common;

use axum::http::StatusCode;
use clinic_desk::domain::entities::FillMode;

#[tokio::test]
async fn test_health_endpoint_success() {
    let templates = common::starter_dir();
    let server = common::test_server(&templates.template_path(), FillMode::Run);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["template"]["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_endpoint_missing_template() {
    let dir = tempfile::tempdir().unwrap();
    let server = common::test_server(&dir.path().join("absent.docx"), FillMode::Run);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["template"]["status"], "error");
}

#[tokio::test]
async fn test_health_trailing_slash() {
    let templates = common::starter_dir();
    let server = common::test_server(&templates.template_path(), FillMode::Run);

    server.get("/health/").await.assert_status_ok();
}

#[tokio::test]
async fn test_health_recovers_when_template_appears() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("template.docx");
    let server = common::test_server(&path, FillMode::Run);

    server
        .get("/health")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);

    std::fs::write(
        &path,
        clinic_desk::infrastructure::docx::starter_template().unwrap(),
    )
    .unwrap();

    server.get("/health").await.assert_status_ok();
}
