use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::AuditInfo;
use crate::entity::internal_order_items::{ActiveModel, Model};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct InternalOrderItemDto {
    pub id: Option<Uuid>,
    #[validate(range(min = 0))]
    pub qty: i32,
    #[validate(length(max = 1000))]
    pub note: Option<String>,
    pub internal_order_id: Uuid,
    pub order_item_id: Uuid,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for InternalOrderItemDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            qty: model.qty,
            note: model.note,
            internal_order_id: model.internal_order_id,
            order_item_id: model.order_item_id,
            audit: Some(AuditInfo::new(
                model.created_by,
                model.created_date,
                model.last_modified_by,
                model.last_modified_date,
            )),
        }
    }
}

impl InternalOrderItemDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            qty: Set(self.qty),
            note: Set(self.note),
            internal_order_id: Set(self.internal_order_id),
            order_item_id: Set(self.order_item_id),
            ..Default::default()
        }
    }
}
