use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use ordermesh_api::{app, config::AppConfig, routes::health::health_check, state::AppState};
use sea_orm::{DatabaseBackend, MockDatabase};
use tower::ServiceExt;

#[tokio::test]
async fn health_check_returns_ok() {
    let response = health_check().await;
    assert_eq!(response.0.message, "Health check");

    let data = response.0.data.expect("health data");
    let data = serde_json::to_value(data).expect("serializable");
    assert_eq!(data["status"], "ok");
}

#[tokio::test]
async fn unknown_route_uses_the_envelope() {
    let orm = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let app = app(AppState::new(orm, AppConfig::with_database_url("postgres://unused")));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/nothing-here")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["data"]["path"], "/api/nothing-here");
}
