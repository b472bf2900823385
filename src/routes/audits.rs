use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    response::{ApiResponse, ItemList},
    routes::params::Pagination,
    services::audit_service::{self, AuditEvent},
    state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AuditQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    /// Only events recorded for this login.
    pub principal: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/audits", get(list_audits))
}

#[utoipa::path(
    get,
    path = "/api/audits",
    params(AuditQuery),
    responses(
        (status = 200, description = "Audit events, newest first", body = ApiResponse<ItemList<AuditEvent>>)
    ),
    security(("bearer_auth" = [])),
    tag = "Audit"
)]
pub async fn list_audits(
    State(state): State<AppState>,
    Query(query): Query<AuditQuery>,
) -> AppResult<Json<ApiResponse<ItemList<AuditEvent>>>> {
    let pagination = Pagination {
        page: query.page,
        per_page: query.per_page,
    };
    let (items, meta) =
        audit_service::list_events(&state, &pagination, query.principal.as_deref()).await?;
    Ok(Json(ApiResponse::success("Audit events", ItemList { items }, Some(meta))))
}
