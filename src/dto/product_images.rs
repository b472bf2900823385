use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::AuditInfo;
use crate::entity::product_images::{ActiveModel, Model};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductImageDto {
    pub id: Option<Uuid>,
    #[validate(length(min = 1, max = 512))]
    pub image_uri: String,
    #[validate(length(max = 255))]
    pub alt_text: Option<String>,
    pub product_id: Uuid,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for ProductImageDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            image_uri: model.image_uri,
            alt_text: model.alt_text,
            product_id: model.product_id,
            audit: Some(AuditInfo::new(
                model.created_by,
                model.created_date,
                model.last_modified_by,
                model.last_modified_date,
            )),
        }
    }
}

impl ProductImageDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            image_uri: Set(self.image_uri),
            alt_text: Set(self.alt_text),
            product_id: Set(self.product_id),
            ..Default::default()
        }
    }
}
