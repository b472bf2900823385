use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::AuditInfo;
use crate::entity::internal_order_histories::{ActiveModel, Model};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct InternalOrderHistoryDto {
    pub id: Option<Uuid>,
    #[validate(length(max = 1000))]
    pub note: Option<String>,
    pub internal_order_id: Uuid,
    pub order_status_id: i64,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for InternalOrderHistoryDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            note: model.note,
            internal_order_id: model.internal_order_id,
            order_status_id: model.order_status_id,
            audit: Some(AuditInfo::new(
                model.created_by,
                model.created_date,
                model.last_modified_by,
                model.last_modified_date,
            )),
        }
    }
}

impl InternalOrderHistoryDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            note: Set(self.note),
            internal_order_id: Set(self.internal_order_id),
            order_status_id: Set(self.order_status_id),
            ..Default::default()
        }
    }
}
