use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::AuditInfo;
use crate::{entity::messages::{ActiveModel, Model}, models::MessageType};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct MessageDto {
    pub id: Option<Uuid>,
    pub message_type: MessageType,
    #[validate(length(max = 4000))]
    pub content: Option<String>,
    #[serde(default)]
    pub is_seen: bool,
    pub participant_id: Uuid,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for MessageDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            message_type: model.message_type,
            content: model.content,
            is_seen: model.is_seen,
            participant_id: model.participant_id,
            audit: Some(AuditInfo::new(
                model.created_by,
                model.created_date,
                model.last_modified_by,
                model.last_modified_date,
            )),
        }
    }
}

impl MessageDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            message_type: Set(self.message_type),
            content: Set(self.content),
            is_seen: Set(self.is_seen),
            participant_id: Set(self.participant_id),
            ..Default::default()
        }
    }
}
