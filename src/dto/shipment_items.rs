use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::AuditInfo;
use crate::entity::shipment_items::{ActiveModel, Model};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ShipmentItemDto {
    pub id: Option<Uuid>,
    #[validate(range(min = 0))]
    pub qty: i32,
    /// Line total in minor currency units.
    #[validate(range(min = 0))]
    pub total: i64,
    pub order_item_id: Uuid,
    pub shipment_id: Uuid,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for ShipmentItemDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            qty: model.qty,
            total: model.total,
            order_item_id: model.order_item_id,
            shipment_id: model.shipment_id,
            audit: Some(AuditInfo::new(
                model.created_by,
                model.created_date,
                model.last_modified_by,
                model.last_modified_date,
            )),
        }
    }
}

impl ShipmentItemDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            qty: Set(self.qty),
            total: Set(self.total),
            order_item_id: Set(self.order_item_id),
            shipment_id: Set(self.shipment_id),
            ..Default::default()
        }
    }
}
