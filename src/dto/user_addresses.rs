use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::AuditInfo;
use crate::{entity::user_addresses::{ActiveModel, Model}, models::AddressType};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserAddressDto {
    pub id: Option<Uuid>,
    pub address_type: AddressType,
    #[validate(length(max = 100))]
    pub friendly_name: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    pub user_id: Uuid,
    pub address_id: Uuid,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for UserAddressDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            address_type: model.address_type,
            friendly_name: model.friendly_name,
            is_default: model.is_default,
            user_id: model.user_id,
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

impl UserAddressDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            address_type: Set(self.address_type),
            friendly_name: Set(self.friendly_name),
            is_default: Set(self.is_default),
            user_id: Set(self.user_id),
            address_id: Set(self.address_id),
            ..Default::default()
        }
    }
}
