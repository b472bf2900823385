use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::{AuditInfo, HEX_CODE};
use crate::entity::colours::{ActiveModel, Model};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ColourDto {
    pub id: Option<Uuid>,
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    /// `#` followed by three or six hex digits.
    #[validate(regex(path = *HEX_CODE))]
    pub hex_code: String,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for ColourDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            hex_code: model.hex_code,
            audit: Some(AuditInfo::new(
                model.created_by,
                model.created_date,
                model.last_modified_by,
                model.last_modified_date,
            )),
        }
    }
}

impl ColourDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            name: Set(self.name),
            hex_code: Set(self.hex_code),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colour(hex: &str) -> ColourDto {
        ColourDto {
            id: None,
            name: "Ocean".into(),
            hex_code: hex.into(),
            audit: None,
        }
    }

    #[test]
    fn accepts_three_and_six_digit_hex_codes() {
        for hex in ["#fff", "#A1B2C3", "#0a0B0c", "#123"] {
            assert!(colour(hex).validate().is_ok(), "{hex} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_hex_codes() {
        for hex in ["fff", "#ffff", "#12345", "#1234567", "#ggg", "", "#", "# fff"] {
            assert!(colour(hex).validate().is_err(), "{hex} should be invalid");
        }
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut dto = colour("#000");
        dto.name = String::new();
        assert!(dto.validate().is_err());
    }
}
