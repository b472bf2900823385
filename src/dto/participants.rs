use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::AuditInfo;
use crate::entity::participants::{ActiveModel, Model};

/// Membership of a user in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ParticipantDto {
    pub id: Option<Uuid>,
    #[serde(default)]
    pub is_admin: bool,
    pub user_id: Uuid,
    pub conversation_id: Uuid,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for ParticipantDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            is_admin: model.is_admin,
            user_id: model.user_id,
            conversation_id: model.conversation_id,
            audit: Some(AuditInfo::new(
                model.created_by,
                model.created_date,
                model.last_modified_by,
                model.last_modified_date,
            )),
        }
    }
}

impl ParticipantDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            is_admin: Set(self.is_admin),
            user_id: Set(self.user_id),
            conversation_id: Set(self.conversation_id),
            ..Default::default()
        }
    }
}
