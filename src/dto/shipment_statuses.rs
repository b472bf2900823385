use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::AuditInfo;
use crate::entity::shipment_statuses::{ActiveModel, Model};

/// One step of the shipment lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ShipmentStatusDto {
    pub id: Option<i64>,
    /// Position of the step in the lifecycle; append-only.
    #[validate(range(min = 1))]
    pub status_code: i32,
    #[validate(length(max = 255))]
    pub description: Option<String>,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for ShipmentStatusDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            status_code: model.status_code,
            description: model.description,
            audit: Some(AuditInfo::new(
                model.created_by,
                model.created_date,
                model.last_modified_by,
                model.last_modified_date,
            )),
        }
    }
}

impl ShipmentStatusDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            status_code: Set(self.status_code),
            description: Set(self.description),
            ..Default::default()
        }
    }
}
