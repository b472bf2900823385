use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::AuditInfo;
use crate::entity::conversations::{ActiveModel, Model};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ConversationDto {
    pub id: Option<Uuid>,
    #[validate(length(max = 255))]
    pub title: Option<String>,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for ConversationDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            title: model.title,
            audit: Some(AuditInfo::new(
                model.created_by,
                model.created_date,
                model.last_modified_by,
                model.last_modified_date,
            )),
        }
    }
}

impl ConversationDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            title: Set(self.title),
            ..Default::default()
        }
    }
}
