use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::AuditInfo;
use crate::entity::shipment_histories::{ActiveModel, Model};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ShipmentHistoryDto {
    pub id: Option<Uuid>,
    #[validate(length(max = 1000))]
    pub note: Option<String>,
    pub shipment_id: Uuid,
    pub shipment_status_id: i64,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for ShipmentHistoryDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            note: model.note,
            shipment_id: model.shipment_id,
            shipment_status_id: model.shipment_status_id,
            audit: Some(AuditInfo::new(
                model.created_by,
                model.created_date,
                model.last_modified_by,
                model.last_modified_date,
            )),
        }
    }
}

impl ShipmentHistoryDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            note: Set(self.note),
            shipment_id: Set(self.shipment_id),
            shipment_status_id: Set(self.shipment_status_id),
            ..Default::default()
        }
    }
}
