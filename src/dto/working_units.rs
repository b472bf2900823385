use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::AuditInfo;
use crate::{entity::working_units::{ActiveModel, Model}, models::WorkingUnitType};

/// A warehouse, store or office holding stock and staff.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct WorkingUnitDto {
    pub id: Option<Uuid>,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub unit_type: WorkingUnitType,
    #[validate(length(max = 512))]
    pub image_uri: Option<String>,
    pub address_id: Option<Uuid>,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for WorkingUnitDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            unit_type: model.unit_type,
            image_uri: model.image_uri,
            address_id: model.address_id,
            audit: Some(AuditInfo::new(
                model.created_by,
                model.created_date,
                model.last_modified_by,
                model.last_modified_date,
            )),
        }
    }
}

impl WorkingUnitDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            name: Set(self.name),
            unit_type: Set(self.unit_type),
            image_uri: Set(self.image_uri),
            address_id: Set(self.address_id),
            ..Default::default()
        }
    }
}
