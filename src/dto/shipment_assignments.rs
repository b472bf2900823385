use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::AuditInfo;
use crate::{entity::shipment_assignments::{ActiveModel, Model}, models::AssignmentStatus};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ShipmentAssignmentDto {
    pub id: Option<Uuid>,
    pub status: AssignmentStatus,
    #[validate(length(max = 1000))]
    pub note: Option<String>,
    /// Courier; unassigned while empty.
    pub user_id: Option<Uuid>,
    pub shipment_id: Uuid,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for ShipmentAssignmentDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            status: model.status,
            note: model.note,
            user_id: model.user_id,
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

impl ShipmentAssignmentDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            status: Set(self.status),
            note: Set(self.note),
            user_id: Set(self.user_id),
            shipment_id: Set(self.shipment_id),
            ..Default::default()
        }
    }
}
