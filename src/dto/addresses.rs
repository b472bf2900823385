use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::AuditInfo;
use crate::entity::addresses::{ActiveModel, Model};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddressDto {
    pub id: Option<Uuid>,
    #[validate(length(min = 1, max = 255))]
    pub line1: String,
    #[validate(length(max = 255))]
    pub line2: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[validate(length(max = 100))]
    pub state: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub country: String,
    #[validate(length(min = 1, max = 20))]
    pub zip: String,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for AddressDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            line1: model.line1,
            line2: model.line2,
            city: model.city,
            state: model.state,
            country: model.country,
            zip: model.zip,
            audit: Some(AuditInfo::new(
                model.created_by,
                model.created_date,
                model.last_modified_by,
                model.last_modified_date,
            )),
        }
    }
}

impl AddressDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            line1: Set(self.line1),
            line2: Set(self.line2),
            city: Set(self.city),
            state: Set(self.state),
            country: Set(self.country),
            zip: Set(self.zip),
            ..Default::default()
        }
    }
}
