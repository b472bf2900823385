use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::AuditInfo;
use crate::{entity::shipments::{ActiveModel, Model}, models::ShipmentType};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ShipmentDto {
    pub id: Option<Uuid>,
    pub shipment_type: ShipmentType,
    pub shipment_date: Option<DateTime<Utc>>,
    #[validate(length(max = 1000))]
    pub note: Option<String>,
    pub shipment_status_id: i64,
    pub order_id: Uuid,
    pub invoice_id: Option<Uuid>,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for ShipmentDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            shipment_type: model.shipment_type,
            shipment_date: model.shipment_date.map(|at| at.with_timezone(&Utc)),
            note: model.note,
            shipment_status_id: model.shipment_status_id,
            order_id: model.order_id,
            invoice_id: model.invoice_id,
            audit: Some(AuditInfo::new(
                model.created_by,
                model.created_date,
                model.last_modified_by,
                model.last_modified_date,
            )),
        }
    }
}

impl ShipmentDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            shipment_type: Set(self.shipment_type),
            shipment_date: Set(self.shipment_date.map(Into::into)),
            note: Set(self.note),
            shipment_status_id: Set(self.shipment_status_id),
            order_id: Set(self.order_id),
            invoice_id: Set(self.invoice_id),
            ..Default::default()
        }
    }
}
