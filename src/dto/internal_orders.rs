use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::AuditInfo;
use crate::{entity::internal_orders::{ActiveModel, Model}, models::InternalOrderType};

/// Work order raised inside the company to fulfil a customer order.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct InternalOrderDto {
    pub id: Option<Uuid>,
    pub internal_order_type: InternalOrderType,
    #[validate(length(max = 1000))]
    pub note: Option<String>,
    pub order_status_id: i64,
    pub root_order_id: Uuid,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for InternalOrderDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            internal_order_type: model.internal_order_type,
            note: model.note,
            order_status_id: model.order_status_id,
            root_order_id: model.root_order_id,
            audit: Some(AuditInfo::new(
                model.created_by,
                model.created_date,
                model.last_modified_by,
                model.last_modified_date,
            )),
        }
    }
}

impl InternalOrderDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            internal_order_type: Set(self.internal_order_type),
            note: Set(self.note),
            order_status_id: Set(self.order_status_id),
            root_order_id: Set(self.root_order_id),
            ..Default::default()
        }
    }
}
