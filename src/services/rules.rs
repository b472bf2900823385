//! Cross-row invariants checked before a write.

use std::collections::HashSet;

use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};
use uuid::Uuid;

use crate::{
    db::OrmConn,
    dto::{InvoiceStatusDto, OrderDto, OrderStatusDto, ShipmentStatusDto},
    entity::orders,
    error::{AppError, AppResult},
};

/// Reject a parent assignment that would close a loop in the order tree.
pub async fn order_hierarchy(orm: &OrmConn, dto: &OrderDto) -> AppResult<()> {
    let (Some(id), Some(parent_id)) = (dto.id, dto.parent_id) else {
        return Ok(());
    };
    if is_self_or_ancestor(orm, id, parent_id).await? {
        return Err(order_cycle());
    }
    Ok(())
}

/// Whether `node` is `start` or lies on the parent chain above it.
pub async fn is_self_or_ancestor<C: ConnectionTrait>(
    db: &C,
    node: Uuid,
    start: Uuid,
) -> AppResult<bool> {
    let mut current = Some(start);
    let mut seen = HashSet::new();
    while let Some(id) = current {
        if id == node {
            return Ok(true);
        }
        if !seen.insert(id) {
            break;
        }
        current = orders::Entity::find_by_id(id)
            .one(db)
            .await?
            .and_then(|order| order.parent_id);
    }
    Ok(false)
}

pub fn order_cycle() -> AppError {
    AppError::bad_request_alert(
        "order",
        "ordercycle",
        "An order cannot be its own ancestor",
    )
}

/// New status codes extend the sequence past the current last step.
pub fn check_appended(
    entity_name: &'static str,
    last_code: Option<i32>,
    status_code: i32,
) -> AppResult<()> {
    match last_code {
        Some(last) if status_code <= last => Err(AppError::bad_request_alert(
            entity_name,
            "statuscodesequence",
            format!("Status code must be greater than {last}"),
        )),
        _ => Ok(()),
    }
}

/// Existing status codes never change.
pub fn check_unchanged(entity_name: &'static str, stored: i32, status_code: i32) -> AppResult<()> {
    if stored != status_code {
        return Err(AppError::bad_request_alert(
            entity_name,
            "statuscodefixed",
            format!("Status code {stored} cannot be changed"),
        ));
    }
    Ok(())
}

macro_rules! status_sequence_guard {
    ($name:ident, $module:ident, $dto:ident, $entity_name:literal) => {
        pub async fn $name(orm: &OrmConn, dto: &$dto) -> AppResult<()> {
            use crate::entity::$module::{Column, Entity};

            match dto.id {
                None => {
                    let last = Entity::find()
                        .order_by_desc(Column::StatusCode)
                        .one(orm)
                        .await?;
                    check_appended($entity_name, last.map(|s| s.status_code), dto.status_code)
                }
                Some(id) => match Entity::find_by_id(id).one(orm).await? {
                    Some(stored) => check_unchanged($entity_name, stored.status_code, dto.status_code),
                    None => Ok(()),
                },
            }
        }
    };
}

status_sequence_guard!(order_status_sequence, order_statuses, OrderStatusDto, "orderStatus");
status_sequence_guard!(invoice_status_sequence, invoice_statuses, InvoiceStatusDto, "invoiceStatus");
status_sequence_guard!(shipment_status_sequence, shipment_statuses, ShipmentStatusDto, "shipmentStatus");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appended_codes_must_exceed_last() {
        assert!(check_appended("orderStatus", None, 1).is_ok());
        assert!(check_appended("orderStatus", Some(3), 4).is_ok());
        let err = check_appended("orderStatus", Some(3), 3).unwrap_err();
        assert_eq!(err.error_key(), Some("statuscodesequence"));
        assert!(check_appended("orderStatus", Some(3), 1).is_err());
    }

    #[test]
    fn stored_codes_are_fixed() {
        assert!(check_unchanged("invoiceStatus", 2, 2).is_ok());
        let err = check_unchanged("invoiceStatus", 2, 5).unwrap_err();
        assert_eq!(err.error_key(), Some("statuscodefixed"));
    }
}
