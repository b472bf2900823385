use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::AuditInfo;
use crate::entity::product_quantities::{ActiveModel, Model};

/// Stock level of one product category in one working unit.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductQuantityDto {
    pub id: Option<Uuid>,
    #[validate(range(min = 0))]
    pub qty: i32,
    pub working_unit_id: Uuid,
    pub product_category_id: Uuid,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for ProductQuantityDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            qty: model.qty,
            working_unit_id: model.working_unit_id,
            product_category_id: model.product_category_id,
            audit: Some(AuditInfo::new(
                model.created_by,
                model.created_date,
                model.last_modified_by,
                model.last_modified_date,
            )),
        }
    }
}

impl ProductQuantityDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            qty: Set(self.qty),
            working_unit_id: Set(self.working_unit_id),
            product_category_id: Set(self.product_category_id),
            ..Default::default()
        }
    }
}
