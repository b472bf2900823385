use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::AuditInfo;
use crate::{entity::staff_infos::{ActiveModel, Model}, models::StaffStatus};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct StaffInfoDto {
    pub id: Option<Uuid>,
    pub status: StaffStatus,
    pub user_id: Uuid,
    pub working_unit_id: Option<Uuid>,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for StaffInfoDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            status: model.status,
            user_id: model.user_id,
            working_unit_id: model.working_unit_id,
            audit: Some(AuditInfo::new(
                model.created_by,
                model.created_date,
                model.last_modified_by,
                model.last_modified_date,
            )),
        }
    }
}

impl StaffInfoDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            status: Set(self.status),
            user_id: Set(self.user_id),
            working_unit_id: Set(self.working_unit_id),
            ..Default::default()
        }
    }
}
