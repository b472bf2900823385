use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::AuditInfo;
use crate::entity::product_categories::{ActiveModel, Model};

/// A colour variant of a product.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductCategoryDto {
    pub id: Option<Uuid>,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(max = 512))]
    pub image_uri: Option<String>,
    pub product_id: Uuid,
    pub colour_id: Uuid,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for ProductCategoryDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            image_uri: model.image_uri,
            product_id: model.product_id,
            colour_id: model.colour_id,
            audit: Some(AuditInfo::new(
                model.created_by,
                model.created_date,
                model.last_modified_by,
                model.last_modified_date,
            )),
        }
    }
}

impl ProductCategoryDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            name: Set(self.name),
            image_uri: Set(self.image_uri),
            product_id: Set(self.product_id),
            colour_id: Set(self.colour_id),
            ..Default::default()
        }
    }
}
