use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::AuditInfo;
use crate::entity::order_items::{ActiveModel, Model};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrderItemDto {
    pub id: Option<Uuid>,
    #[validate(range(min = 0))]
    pub ordered_qty: i32,
    #[validate(range(min = 0))]
    pub received_qty: Option<i32>,
    /// Unit price in minor currency units.
    #[validate(range(min = 0))]
    pub unit_price: i64,
    pub order_id: Uuid,
    pub product_category_id: Uuid,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for OrderItemDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            ordered_qty: model.ordered_qty,
            received_qty: model.received_qty,
            unit_price: model.unit_price,
            order_id: model.order_id,
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

impl OrderItemDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            ordered_qty: Set(self.ordered_qty),
            received_qty: Set(self.received_qty),
            unit_price: Set(self.unit_price),
            order_id: Set(self.order_id),
            product_category_id: Set(self.product_category_id),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> OrderItemDto {
        OrderItemDto {
            id: None,
            ordered_qty: 3,
            received_qty: Some(0),
            unit_price: 1250,
            order_id: Uuid::new_v4(),
            product_category_id: Uuid::new_v4(),
            audit: None,
        }
    }

    #[test]
    fn negative_quantities_and_prices_are_rejected() {
        assert!(item().validate().is_ok());

        let mut dto = item();
        dto.ordered_qty = -1;
        assert!(dto.validate().is_err());

        let mut dto = item();
        dto.received_qty = Some(-5);
        assert!(dto.validate().is_err());

        let mut dto = item();
        dto.unit_price = -1;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn mapping_to_active_model_leaves_key_and_audit_unset() {
        let active = item().into_active();
        assert!(active.id.is_not_set());
        assert!(active.created_by.is_not_set());
        assert_eq!(active.unit_price.into_value(), Some(1250i64.into()));
    }
}
