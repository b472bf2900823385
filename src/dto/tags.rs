use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::AuditInfo;
use crate::entity::tags::{ActiveModel, Model};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TagDto {
    pub id: Option<Uuid>,
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for TagDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            audit: Some(AuditInfo::new(
                model.created_by,
                model.created_date,
                model.last_modified_by,
                model.last_modified_date,
            )),
        }
    }
}

impl TagDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            name: Set(self.name),
            ..Default::default()
        }
    }
}
