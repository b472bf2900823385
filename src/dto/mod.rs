//! API-facing representations of the entities and their mappers.
//!
//! Relationships are flattened to the related row's identifier. Audit columns are
//! exposed read-only under `audit`.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod addresses;
pub mod colours;
pub mod conversations;
pub mod internal_order_histories;
pub mod internal_order_items;
pub mod internal_orders;
pub mod invoice_histories;
pub mod invoice_statuses;
pub mod invoices;
pub mod messages;
pub mod order_histories;
pub mod order_items;
pub mod order_statuses;
pub mod orders;
pub mod participants;
pub mod product_categories;
pub mod product_images;
pub mod product_quantities;
pub mod products;
pub mod shipment_assignments;
pub mod shipment_histories;
pub mod shipment_items;
pub mod shipment_statuses;
pub mod shipments;
pub mod staff_infos;
pub mod tags;
pub mod user_addresses;
pub mod user_details;
pub mod users;
pub mod warehouse_assignments;
pub mod working_units;

pub use addresses::AddressDto;
pub use colours::ColourDto;
pub use conversations::ConversationDto;
pub use internal_order_histories::InternalOrderHistoryDto;
pub use internal_order_items::InternalOrderItemDto;
pub use internal_orders::InternalOrderDto;
pub use invoice_histories::InvoiceHistoryDto;
pub use invoice_statuses::InvoiceStatusDto;
pub use invoices::InvoiceDto;
pub use messages::MessageDto;
pub use order_histories::OrderHistoryDto;
pub use order_items::OrderItemDto;
pub use order_statuses::OrderStatusDto;
pub use orders::OrderDto;
pub use participants::ParticipantDto;
pub use product_categories::ProductCategoryDto;
pub use product_images::ProductImageDto;
pub use product_quantities::ProductQuantityDto;
pub use products::ProductDto;
pub use shipment_assignments::ShipmentAssignmentDto;
pub use shipment_histories::ShipmentHistoryDto;
pub use shipment_items::ShipmentItemDto;
pub use shipment_statuses::ShipmentStatusDto;
pub use shipments::ShipmentDto;
pub use staff_infos::StaffInfoDto;
pub use tags::TagDto;
pub use user_addresses::UserAddressDto;
pub use user_details::UserDetailsDto;
pub use users::UserDto;
pub use warehouse_assignments::WarehouseAssignmentDto;
pub use working_units::WorkingUnitDto;

pub(crate) static HEX_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("valid hex code pattern"));

pub(crate) static E164_PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").expect("valid phone pattern"));

/// Who created and last modified a row, and when.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuditInfo {
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_modified_by: Option<String>,
    pub last_modified_date: Option<DateTime<Utc>>,
}

impl AuditInfo {
    pub fn new(
        created_by: String,
        created_date: DateTimeWithTimeZone,
        last_modified_by: Option<String>,
        last_modified_date: Option<DateTimeWithTimeZone>,
    ) -> Self {
        Self {
            created_by,
            created_date: created_date.with_timezone(&Utc),
            last_modified_by,
            last_modified_date: last_modified_date.map(|at| at.with_timezone(&Utc)),
        }
    }
}

/// Identity equality: equal only when both sides carry the same identifier.
/// Unsaved DTOs are never equal, not even to themselves.
macro_rules! identity_eq {
    ($($dto:ty),+ $(,)?) => {
        $(
            impl PartialEq for $dto {
                fn eq(&self, other: &Self) -> bool {
                    matches!((&self.id, &other.id), (Some(a), Some(b)) if a == b)
                }
            }
        )+
    };
}

identity_eq!(
    AddressDto,
    ColourDto,
    ConversationDto,
    InternalOrderHistoryDto,
    InternalOrderItemDto,
    InternalOrderDto,
    InvoiceHistoryDto,
    InvoiceStatusDto,
    InvoiceDto,
    MessageDto,
    OrderHistoryDto,
    OrderItemDto,
    OrderStatusDto,
    OrderDto,
    ParticipantDto,
    ProductCategoryDto,
    ProductImageDto,
    ProductQuantityDto,
    ProductDto,
    ShipmentAssignmentDto,
    ShipmentHistoryDto,
    ShipmentItemDto,
    ShipmentStatusDto,
    ShipmentDto,
    StaffInfoDto,
    TagDto,
    UserAddressDto,
    UserDetailsDto,
    UserDto,
    WarehouseAssignmentDto,
    WorkingUnitDto,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderType;
    use uuid::Uuid;

    fn tag(id: Option<Uuid>, name: &str) -> TagDto {
        TagDto {
            id,
            name: name.to_string(),
            audit: None,
        }
    }

    #[test]
    fn same_identifier_means_equal() {
        let id = Uuid::new_v4();
        assert_eq!(tag(Some(id), "fragile"), tag(Some(id), "heavy"));
    }

    #[test]
    fn different_identifiers_are_not_equal() {
        assert_ne!(tag(Some(Uuid::new_v4()), "a"), tag(Some(Uuid::new_v4()), "a"));
    }

    #[test]
    fn missing_identifiers_are_never_equal() {
        let unsaved = tag(None, "a");
        assert_ne!(unsaved, tag(None, "a"));
        assert_ne!(unsaved, unsaved.clone());
        assert_ne!(unsaved, tag(Some(Uuid::new_v4()), "a"));
    }

    #[test]
    fn serial_keyed_dtos_follow_the_same_rule() {
        let status = |id| OrderStatusDto {
            id,
            status_code: 1,
            description: None,
            audit: None,
        };
        assert_eq!(status(Some(7)), status(Some(7)));
        assert_ne!(status(None), status(None));
    }

    #[test]
    fn audit_block_is_ignored_on_input() {
        let json = serde_json::json!({
            "order_type": "PHONE",
            "priority": 10,
            "customer_id": Uuid::new_v4(),
            "order_status_id": 2,
            "audit": { "created_by": "mallory", "created_date": "2020-01-01T00:00:00Z" }
        });
        let dto: OrderDto = serde_json::from_value(json).unwrap();
        assert_eq!(dto.order_type, OrderType::Phone);
        assert!(dto.audit.is_none());
    }
}
