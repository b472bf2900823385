use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    db::OrmConn,
    entity::audit_logs::ActiveModel,
    error::AppResult,
    middleware::auth::Auditor,
};

pub async fn log_audit(
    orm: &OrmConn,
    auditor: &Auditor,
    action: &str,
    resource: Option<&str>,
    metadata: Option<Value>,
) -> AppResult<()> {
    ActiveModel {
        id: Set(Uuid::new_v4()),
        principal: Set(auditor.login().to_string()),
        action: Set(action.to_string()),
        resource: Set(resource.map(str::to_string)),
        metadata: Set(metadata),
        created_at: Set(Utc::now().into()),
    }
    .insert(orm)
    .await?;

    Ok(())
}

/// Record an audit event; failures are logged and swallowed.
pub async fn record(
    orm: &OrmConn,
    auditor: &Auditor,
    action: &str,
    resource: &str,
    metadata: Value,
) {
    if let Err(err) = log_audit(orm, auditor, action, Some(resource), Some(metadata)).await {
        tracing::warn!(error = %err, action, resource, "audit log failed");
    }
}
