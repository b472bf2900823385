use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::AuditInfo;
use crate::{entity::orders::{ActiveModel, Model}, models::OrderType};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_not_own_parent"))]
pub struct OrderDto {
    pub id: Option<Uuid>,
    pub order_type: OrderType,
    #[validate(range(min = 0, max = 100))]
    pub priority: i32,
    #[validate(length(max = 1000))]
    pub internal_notes: Option<String>,
    #[validate(length(max = 1000))]
    pub customer_notes: Option<String>,
    pub customer_id: Uuid,
    pub order_status_id: i64,
    pub address_id: Option<Uuid>,
    /// Parent order when this order was split off another one.
    pub parent_id: Option<Uuid>,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for OrderDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            order_type: model.order_type,
            priority: model.priority,
            internal_notes: model.internal_notes,
            customer_notes: model.customer_notes,
            customer_id: model.customer_id,
            order_status_id: model.order_status_id,
            address_id: model.address_id,
            parent_id: model.parent_id,
            audit: Some(AuditInfo::new(
                model.created_by,
                model.created_date,
                model.last_modified_by,
                model.last_modified_date,
            )),
        }
    }
}

impl OrderDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            order_type: Set(self.order_type),
            priority: Set(self.priority),
            internal_notes: Set(self.internal_notes),
            customer_notes: Set(self.customer_notes),
            customer_id: Set(self.customer_id),
            order_status_id: Set(self.order_status_id),
            address_id: Set(self.address_id),
            parent_id: Set(self.parent_id),
            ..Default::default()
        }
    }
}

fn validate_not_own_parent(dto: &OrderDto) -> Result<(), ValidationError> {
    if dto.id.is_some() && dto.id == dto.parent_id {
        return Err(ValidationError::new("own_parent")
            .with_message("an order cannot be its own parent".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> OrderDto {
        OrderDto {
            id: None,
            order_type: OrderType::Online,
            priority: 50,
            internal_notes: None,
            customer_notes: Some("leave at the door".into()),
            customer_id: Uuid::new_v4(),
            order_status_id: 1,
            address_id: None,
            parent_id: None,
            audit: None,
        }
    }

    #[test]
    fn priority_must_stay_within_bounds() {
        let mut dto = order();
        assert!(dto.validate().is_ok());
        dto.priority = 101;
        assert!(dto.validate().is_err());
        dto.priority = -1;
        assert!(dto.validate().is_err());
        dto.priority = 100;
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn order_cannot_be_its_own_parent() {
        let id = Uuid::new_v4();
        let mut dto = order();
        dto.id = Some(id);
        dto.parent_id = Some(id);
        let errors = dto.validate().unwrap_err();
        assert!(errors.errors().contains_key("__all__"));

        dto.parent_id = Some(Uuid::new_v4());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn missing_customer_fails_deserialization() {
        let json = serde_json::json!({
            "order_type": "ONLINE",
            "priority": 1,
            "order_status_id": 1
        });
        assert!(serde_json::from_value::<OrderDto>(json).is_err());
    }
}
