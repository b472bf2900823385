use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    entity::audit_logs,
    error::AppResult,
    response::Meta,
    routes::params::Pagination,
    state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct AuditEvent {
    pub id: Uuid,
    pub principal: String,
    pub action: String,
    pub resource: Option<String>,
    pub metadata: Option<Value>,
    pub created_at: DateTime<Utc>,
}

impl From<audit_logs::Model> for AuditEvent {
    fn from(model: audit_logs::Model) -> Self {
        Self {
            id: model.id,
            principal: model.principal,
            action: model.action,
            resource: model.resource,
            metadata: model.metadata,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

/// Audit events, newest first, optionally narrowed to one principal.
pub async fn list_events(
    state: &AppState,
    pagination: &Pagination,
    principal: Option<&str>,
) -> AppResult<(Vec<AuditEvent>, Meta)> {
    let (page, per_page, offset) = pagination.normalize();

    let mut select = audit_logs::Entity::find();
    if let Some(principal) = principal {
        select = select.filter(audit_logs::Column::Principal.eq(principal));
    }

    let total = select.clone().count(&*state.orm).await?;
    let events = select
        .order_by_desc(audit_logs::Column::CreatedAt)
        .limit(per_page as u64)
        .offset(offset as u64)
        .all(&*state.orm)
        .await?
        .into_iter()
        .map(AuditEvent::from)
        .collect();

    Ok((events, Meta::new(page, per_page, total as i64)))
}
