use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::AuditInfo;
use crate::entity::users::{ActiveModel, Model};

/// A user account as seen by the order and messaging domain.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserDto {
    pub id: Option<Uuid>,
    #[validate(length(min = 1, max = 50))]
    pub login: String,
    #[validate(length(max = 50))]
    pub first_name: Option<String>,
    #[validate(length(max = 50))]
    pub last_name: Option<String>,
    #[validate(email, length(max = 254))]
    pub email: Option<String>,
    #[serde(default)]
    pub activated: bool,
    #[validate(length(max = 10))]
    pub lang_key: Option<String>,
    #[validate(length(max = 256))]
    pub image_url: Option<String>,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for UserDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            login: model.login,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            activated: model.activated,
            lang_key: model.lang_key,
            image_url: model.image_url,
            audit: Some(AuditInfo::new(
                model.created_by,
                model.created_date,
                model.last_modified_by,
                model.last_modified_date,
            )),
        }
    }
}

impl UserDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            login: Set(self.login),
            first_name: Set(self.first_name),
            last_name: Set(self.last_name),
            email: Set(self.email),
            activated: Set(self.activated),
            lang_key: Set(self.lang_key),
            image_url: Set(self.image_url),
            ..Default::default()
        }
    }
}
