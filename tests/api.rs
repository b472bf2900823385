// Router-level tests against a mocked database connection.

use std::collections::BTreeMap;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, StatusCode, header},
};
use chrono::Utc;
use ordermesh_api::{
    app,
    config::AppConfig,
    entity::{colours, order_statuses, orders, tags},
    models::OrderType,
    state::AppState,
};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
use serde_json::{Value as Json, json};
use tower::ServiceExt;
use uuid::Uuid;

fn router(db: MockDatabase) -> Router {
    let mut config = AppConfig::with_database_url("postgres://unused");
    config.jwt_secret = Some("test-secret".to_string());
    app(AppState::new(db.into_connection(), config))
}

fn router_without_secret(db: MockDatabase) -> Router {
    app(AppState::new(
        db.into_connection(),
        AppConfig::with_database_url("postgres://unused"),
    ))
}

fn empty_db() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

async fn send(app: Router, method: &str, uri: &str, body: Option<Json>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    };
    app.oneshot(request.unwrap()).await.unwrap()
}

async fn json_body(response: Response<Body>) -> Json {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn header_str<'a>(response: &'a Response<Body>, name: &str) -> &'a str {
    response.headers()[name].to_str().unwrap()
}

fn tag(id: Uuid, name: &str) -> tags::Model {
    tags::Model {
        id,
        name: name.to_string(),
        created_by: "system".to_string(),
        created_date: Utc::now().into(),
        last_modified_by: None,
        last_modified_date: None,
    }
}

fn order(id: Uuid, parent_id: Option<Uuid>) -> orders::Model {
    orders::Model {
        id,
        order_type: OrderType::Online,
        priority: 10,
        internal_notes: None,
        customer_notes: None,
        customer_id: Uuid::new_v4(),
        order_status_id: 1,
        address_id: None,
        parent_id,
        created_by: "system".to_string(),
        created_date: Utc::now().into(),
        last_modified_by: None,
        last_modified_date: None,
    }
}

#[tokio::test]
async fn create_with_identifier_is_rejected() {
    let response = send(
        router(empty_db()),
        "POST",
        "/api/addresses",
        Some(json!({
            "id": Uuid::new_v4(),
            "line1": "1 Main St",
            "city": "Springfield",
            "country": "US",
            "zip": "12345"
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(header_str(&response, "x-ordermesh-error"), "error.idexists");
    assert_eq!(header_str(&response, "x-ordermesh-params"), "address");
    let body = json_body(response).await;
    assert_eq!(body["data"]["error_key"], "error.idexists");
}

#[tokio::test]
async fn invalid_hex_code_fails_validation() {
    let response = send(
        router(empty_db()),
        "POST",
        "/api/colours",
        Some(json!({ "name": "Teal", "hex_code": "teal" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_required_field_is_a_bad_request() {
    let response = send(
        router(empty_db()),
        "POST",
        "/api/colours",
        Some(json!({ "name": "Teal" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_returns_created_with_alert_headers() {
    let id = Uuid::new_v4();
    let stored = colours::Model {
        id,
        name: "Teal".to_string(),
        hex_code: "#008080".to_string(),
        created_by: "anonymousUser".to_string(),
        created_date: Utc::now().into(),
        last_modified_by: Some("anonymousUser".to_string()),
        last_modified_date: Some(Utc::now().into()),
    };
    let db = empty_db().append_query_results([vec![stored]]);

    let response = send(
        router(db),
        "POST",
        "/api/colours",
        Some(json!({ "name": "Teal", "hex_code": "#008080" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(header_str(&response, "x-ordermesh-alert"), "ordermesh.colour.created");
    assert_eq!(header_str(&response, "x-ordermesh-params"), id.to_string());
    let body = json_body(response).await;
    assert_eq!(body["data"]["id"], id.to_string());
    assert_eq!(body["data"]["audit"]["created_by"], "anonymousUser");
}

#[tokio::test]
async fn update_requires_body_identifier() {
    let id = Uuid::new_v4();
    let response = send(
        router(empty_db()),
        "PUT",
        &format!("/api/tags/{id}"),
        Some(json!({ "name": "fragile" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(header_str(&response, "x-ordermesh-error"), "error.idnull");
}

#[tokio::test]
async fn update_rejects_mismatched_identifier() {
    let response = send(
        router(empty_db()),
        "PUT",
        &format!("/api/tags/{}", Uuid::new_v4()),
        Some(json!({ "id": Uuid::new_v4(), "name": "fragile" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(header_str(&response, "x-ordermesh-error"), "error.idinvalid");
}

#[tokio::test]
async fn update_of_missing_record_is_not_found() {
    let id = Uuid::new_v4();
    let db = empty_db().append_query_results([Vec::<tags::Model>::new()]);
    let response = send(
        router(db),
        "PUT",
        &format!("/api/tags/{id}"),
        Some(json!({ "id": id, "name": "fragile" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(header_str(&response, "x-ordermesh-error"), "error.idnotfound");
}

#[tokio::test]
async fn get_missing_record_is_not_found() {
    let db = empty_db().append_query_results([Vec::<tags::Model>::new()]);
    let response = send(router(db), "GET", &format!("/api/tags/{}", Uuid::new_v4()), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_keeps_members_that_are_absent_or_null() {
    let id = Uuid::new_v4();
    let db = empty_db().append_query_results([vec![tag(id, "fragile")], vec![tag(id, "heavy")]]);

    let response = send(
        router(db),
        "PATCH",
        &format!("/api/tags/{id}"),
        Some(json!({ "id": id, "name": "heavy" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header_str(&response, "x-ordermesh-alert"), "ordermesh.tag.updated");
    let body = json_body(response).await;
    assert_eq!(body["data"]["name"], "heavy");
}

#[tokio::test]
async fn patch_with_other_identifier_is_rejected() {
    let response = send(
        router(empty_db()),
        "PATCH",
        &format!("/api/tags/{}", Uuid::new_v4()),
        Some(json!({ "id": Uuid::new_v4() })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(header_str(&response, "x-ordermesh-error"), "error.idinvalid");
}

#[tokio::test]
async fn delete_reports_missing_rows() {
    let db = empty_db().append_exec_results([MockExecResult {
        last_insert_id: 0,
        rows_affected: 0,
    }]);
    let response = send(router(db), "DELETE", &format!("/api/tags/{}", Uuid::new_v4()), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_returns_no_content() {
    let id = Uuid::new_v4();
    let db = empty_db().append_exec_results([MockExecResult {
        last_insert_id: 0,
        rows_affected: 1,
    }]);
    let response = send(router(db), "DELETE", &format!("/api/tags/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(header_str(&response, "x-ordermesh-alert"), "ordermesh.tag.deleted");
    assert_eq!(header_str(&response, "x-ordermesh-params"), id.to_string());
}

#[tokio::test]
async fn count_applies_criteria() {
    let db = empty_db().append_query_results([[BTreeMap::from([(
        "num_items",
        Value::BigInt(Some(3)),
    )])]]);
    let response = send(router(db), "GET", "/api/tags/count?name.contains=fra", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["data"]["count"], 3);
}

#[tokio::test]
async fn list_rejects_unknown_criteria() {
    let response = send(router(empty_db()), "GET", "/api/orders?priority.near=3", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(router(empty_db()), "GET", "/api/orders?colour.equals=red", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn substring_filters_require_text_columns() {
    let response = send(router(empty_db()), "GET", "/api/orders?priority.contains=5", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(
        router(empty_db()),
        "GET",
        "/api/orders/count?customer_id.contains=ab",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_accepts_the_largest_page_number() {
    let db = empty_db()
        .append_query_results([[BTreeMap::from([("num_items", Value::BigInt(Some(1)))])]])
        .append_query_results([Vec::<tags::Model>::new()]);
    let uri = format!("/api/tags?page={}", i64::MAX);
    let response = send(router(db), "GET", &uri, None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["meta"]["page"], i64::MAX);
    assert_eq!(body["data"]["items"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn list_returns_page_meta() {
    let db = empty_db()
        .append_query_results([[BTreeMap::from([("num_items", Value::BigInt(Some(1)))])]])
        .append_query_results([vec![tag(Uuid::new_v4(), "fragile")]]);
    let response = send(router(db), "GET", "/api/tags?page=1&per_page=5&sort_by=name", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["meta"]["page"], 1);
    assert_eq!(body["meta"]["per_page"], 5);
    assert_eq!(body["meta"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["name"], "fragile");
}

#[tokio::test]
async fn search_requires_a_query() {
    let response = send(router(empty_db()), "GET", "/api/tags/_search", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn status_codes_are_append_only() {
    let last = order_statuses::Model {
        id: 6,
        status_code: 6,
        description: Some("CANCELLED".to_string()),
        created_by: "system".to_string(),
        created_date: Utc::now().into(),
        last_modified_by: None,
        last_modified_date: None,
    };
    let db = empty_db().append_query_results([vec![last]]);
    let response = send(
        router(db),
        "POST",
        "/api/order-statuses",
        Some(json!({ "status_code": 3, "description": "LATE" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(header_str(&response, "x-ordermesh-error"), "error.statuscodesequence");
}

#[tokio::test]
async fn order_cannot_become_its_own_parent() {
    let id = Uuid::new_v4();
    let response = send(
        router(empty_db()),
        "PUT",
        &format!("/api/orders/{id}"),
        Some(json!({
            "id": id,
            "order_type": "ONLINE",
            "priority": 10,
            "customer_id": Uuid::new_v4(),
            "order_status_id": 1,
            "parent_id": id
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_bearer_token_is_unauthorized() {
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/tags/{}", Uuid::new_v4()))
        .header(header::AUTHORIZATION, "Bearer not-a-jwt")
        .body(Body::empty())
        .unwrap();
    let response = router(empty_db()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn bearer_token_without_configured_secret_is_unauthorized() {
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/tags/{}", Uuid::new_v4()))
        .header(header::AUTHORIZATION, "Bearer some.jwt.token")
        .body(Body::empty())
        .unwrap();
    let response = router_without_secret(empty_db()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn non_bearer_scheme_is_unauthorized() {
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/tags/{}", Uuid::new_v4()))
        .header(header::AUTHORIZATION, "Basic YWxpY2U6c2VjcmV0")
        .body(Body::empty())
        .unwrap();
    let response = router(empty_db()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn relinking_an_ancestor_as_child_is_a_cycle() {
    let root = Uuid::new_v4();
    let ancestor = Uuid::new_v4();
    // owner lookup, current children, then the ancestor walk inside the transaction
    let db = empty_db()
        .append_query_results([vec![order(root, Some(ancestor))]])
        .append_query_results([Vec::<orders::Model>::new()])
        .append_query_results([vec![order(root, Some(ancestor))]]);

    let response = send(
        router(db),
        "PUT",
        &format!("/api/orders/{root}/children"),
        Some(json!({ "ids": [ancestor] })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(header_str(&response, "x-ordermesh-error"), "error.ordercycle");
}
