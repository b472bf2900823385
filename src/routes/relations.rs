use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    dto::{OrderDto, TagDto},
    error::AppResult,
    extract::AppJson,
    middleware::auth::Auditor,
    response::{ApiResponse, ItemList, Meta},
    services::relation_service,
    state::AppState,
};

/// The complete member set of a relation.
#[derive(Debug, Deserialize, ToSchema)]
pub struct MemberIds {
    pub ids: Vec<Uuid>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/orders/{id}/children",
            get(list_children).put(replace_children),
        )
        .route("/api/products/{id}/tags", get(list_tags).put(replace_tags))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}/children",
    params(("id" = Uuid, Path, description = "Parent order ID")),
    responses(
        (status = 200, description = "Orders split off this one", body = ApiResponse<ItemList<OrderDto>>),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn list_children(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ItemList<OrderDto>>>> {
    let items = relation_service::order_children(&state, id).await?;
    Ok(Json(ApiResponse::success("Children", ItemList { items }, None)))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}/children",
    params(("id" = Uuid, Path, description = "Parent order ID")),
    request_body = MemberIds,
    responses(
        (status = 200, description = "New children", body = ApiResponse<ItemList<OrderDto>>),
        (status = 400, description = "A listed order is the parent or one of its ancestors"),
        (status = 404, description = "Parent or listed order not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn replace_children(
    State(state): State<AppState>,
    auditor: Auditor,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<MemberIds>,
) -> AppResult<Json<ApiResponse<ItemList<OrderDto>>>> {
    let items = relation_service::replace_order_children(&state, &auditor, id, payload.ids).await?;
    Ok(Json(ApiResponse::success(
        "Children replaced",
        ItemList { items },
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}/tags",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Tags of the product", body = ApiResponse<ItemList<TagDto>>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Catalogue"
)]
pub async fn list_tags(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ItemList<TagDto>>>> {
    let items = relation_service::product_tags(&state, id).await?;
    Ok(Json(ApiResponse::success("Tags", ItemList { items }, None)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}/tags",
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = MemberIds,
    responses(
        (status = 200, description = "New tag set", body = ApiResponse<ItemList<TagDto>>),
        (status = 404, description = "Product or listed tag not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Catalogue"
)]
pub async fn replace_tags(
    State(state): State<AppState>,
    auditor: Auditor,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<MemberIds>,
) -> AppResult<Json<ApiResponse<ItemList<TagDto>>>> {
    let items = relation_service::replace_product_tags(&state, &auditor, id, payload.ids).await?;
    Ok(Json(ApiResponse::success(
        "Tags replaced",
        ItemList { items },
        Some(Meta::empty()),
    )))
}
