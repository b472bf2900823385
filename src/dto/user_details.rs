use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::{AuditInfo, E164_PHONE};
use crate::entity::user_details::{ActiveModel, Model};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserDetailsDto {
    pub id: Option<Uuid>,
    /// Phone number in E.164 format.
    #[validate(regex(path = *E164_PHONE))]
    pub phone: Option<String>,
    pub user_id: Uuid,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for UserDetailsDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            phone: model.phone,
            user_id: model.user_id,
            audit: Some(AuditInfo::new(
                model.created_by,
                model.created_date,
                model.last_modified_by,
                model.last_modified_date,
            )),
        }
    }
}

impl UserDetailsDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            phone: Set(self.phone),
            user_id: Set(self.user_id),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(phone: Option<&str>) -> UserDetailsDto {
        UserDetailsDto {
            id: None,
            phone: phone.map(str::to_string),
            user_id: Uuid::new_v4(),
            audit: None,
        }
    }

    #[test]
    fn phone_must_be_e164() {
        assert!(details(Some("+14155552671")).validate().is_ok());
        assert!(details(Some("+442071838750")).validate().is_ok());
        assert!(details(Some("4155552671")).validate().is_err());
        assert!(details(Some("+0123456")).validate().is_err());
        assert!(details(Some("+1 415 555 2671")).validate().is_err());
        assert!(details(Some("+1234567890123456")).validate().is_err());
    }

    #[test]
    fn phone_is_optional() {
        assert!(details(None).validate().is_ok());
    }
}
