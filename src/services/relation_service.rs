//! Replacing the member set of a one-to-many or many-to-many relation.
//!
//! Every member that leaves the set gets its back-reference cleared, every member
//! that joins gets it pointed at the owner, inside one transaction.

use std::{collections::HashSet, hash::Hash};

use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder, TransactionTrait, Value, sea_query::Expr,
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    audit,
    dto::{OrderDto, TagDto},
    entity::{orders, product_tags, products, tags},
    error::{AppError, AppResult},
    middleware::auth::Auditor,
    services::rules,
    state::AppState,
};

/// Members to detach from and attach to an owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relink<K> {
    pub unlink: Vec<K>,
    pub link: Vec<K>,
}

impl<K> Relink<K> {
    pub fn is_noop(&self) -> bool {
        self.unlink.is_empty() && self.link.is_empty()
    }
}

/// Diff the current member set against the desired one. Duplicates are
/// dropped; first-appearance order is kept.
pub fn plan_relink<K: Copy + Eq + Hash>(current: &[K], desired: &[K]) -> Relink<K> {
    let current_set: HashSet<K> = current.iter().copied().collect();
    let desired_set: HashSet<K> = desired.iter().copied().collect();

    let mut seen = HashSet::new();
    let unlink = current
        .iter()
        .copied()
        .filter(|k| !desired_set.contains(k) && seen.insert(*k))
        .collect();
    let link = desired
        .iter()
        .copied()
        .filter(|k| !current_set.contains(k) && seen.insert(*k))
        .collect();

    Relink { unlink, link }
}

pub async fn order_children(state: &AppState, id: Uuid) -> AppResult<Vec<OrderDto>> {
    orders::Entity::find_by_id(id)
        .one(&*state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let children = orders::Entity::find()
        .filter(orders::Column::ParentId.eq(id))
        .order_by_asc(orders::Column::CreatedDate)
        .all(&*state.orm)
        .await?
        .into_iter()
        .map(OrderDto::from)
        .collect();
    Ok(children)
}

pub async fn replace_order_children(
    state: &AppState,
    auditor: &Auditor,
    id: Uuid,
    child_ids: Vec<Uuid>,
) -> AppResult<Vec<OrderDto>> {
    orders::Entity::find_by_id(id)
        .one(&*state.orm)
        .await?
        .ok_or_else(|| AppError::not_found_alert("order"))?;

    let current: Vec<Uuid> = orders::Entity::find()
        .filter(orders::Column::ParentId.eq(id))
        .all(&*state.orm)
        .await?
        .into_iter()
        .map(|order| order.id)
        .collect();
    let plan = plan_relink(&current, &child_ids);

    if !plan.is_noop() {
        let now = Utc::now().fixed_offset();
        let txn = state.orm.begin().await?;

        // Ancestor walk runs on the transaction that performs the update.
        for child in &plan.link {
            if rules::is_self_or_ancestor(&txn, *child, id).await? {
                return Err(rules::order_cycle());
            }
        }

        if !plan.link.is_empty() {
            let found = orders::Entity::find()
                .filter(orders::Column::Id.is_in(plan.link.clone()))
                .count(&txn)
                .await?;
            if found != plan.link.len() as u64 {
                return Err(AppError::not_found_alert("order"));
            }
            orders::Entity::update_many()
                .col_expr(orders::Column::ParentId, Expr::value(id))
                .col_expr(orders::Column::LastModifiedBy, Expr::value(auditor.login()))
                .col_expr(orders::Column::LastModifiedDate, Expr::value(now))
                .filter(orders::Column::Id.is_in(plan.link.clone()))
                .exec(&txn)
                .await?;
        }

        if !plan.unlink.is_empty() {
            orders::Entity::update_many()
                .col_expr(orders::Column::ParentId, Expr::value(Value::Uuid(None)))
                .col_expr(orders::Column::LastModifiedBy, Expr::value(auditor.login()))
                .col_expr(orders::Column::LastModifiedDate, Expr::value(now))
                .filter(orders::Column::Id.is_in(plan.unlink.clone()))
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;
        tracing::debug!(order_id = %id, linked = plan.link.len(), unlinked = plan.unlink.len(), "order children replaced");
        audit::record(
            &*state.orm,
            auditor,
            "relink",
            "order",
            json!({ "id": id, "linked": plan.link, "unlinked": plan.unlink }),
        )
        .await;
    }

    order_children(state, id).await
}

pub async fn product_tags(state: &AppState, product_id: Uuid) -> AppResult<Vec<TagDto>> {
    let product = products::Entity::find_by_id(product_id)
        .one(&*state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let tags = product
        .find_related(tags::Entity)
        .order_by_asc(tags::Column::Name)
        .all(&*state.orm)
        .await?
        .into_iter()
        .map(TagDto::from)
        .collect();
    Ok(tags)
}

pub async fn replace_product_tags(
    state: &AppState,
    auditor: &Auditor,
    product_id: Uuid,
    tag_ids: Vec<Uuid>,
) -> AppResult<Vec<TagDto>> {
    products::Entity::find_by_id(product_id)
        .one(&*state.orm)
        .await?
        .ok_or_else(|| AppError::not_found_alert("product"))?;

    let current: Vec<Uuid> = product_tags::Entity::find()
        .filter(product_tags::Column::ProductId.eq(product_id))
        .all(&*state.orm)
        .await?
        .into_iter()
        .map(|row| row.tag_id)
        .collect();
    let plan = plan_relink(&current, &tag_ids);

    if !plan.is_noop() {
        let txn = state.orm.begin().await?;

        if !plan.unlink.is_empty() {
            product_tags::Entity::delete_many()
                .filter(product_tags::Column::ProductId.eq(product_id))
                .filter(product_tags::Column::TagId.is_in(plan.unlink.clone()))
                .exec(&txn)
                .await?;
        }

        if !plan.link.is_empty() {
            let found = tags::Entity::find()
                .filter(tags::Column::Id.is_in(plan.link.clone()))
                .count(&txn)
                .await?;
            if found != plan.link.len() as u64 {
                return Err(AppError::not_found_alert("tag"));
            }
            let rows = plan.link.iter().map(|tag_id| product_tags::ActiveModel {
                product_id: Set(product_id),
                tag_id: Set(*tag_id),
            });
            product_tags::Entity::insert_many(rows)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;
        tracing::debug!(%product_id, linked = plan.link.len(), unlinked = plan.unlink.len(), "product tags replaced");
        audit::record(
            &*state.orm,
            auditor,
            "relink",
            "product",
            json!({ "id": product_id, "tags_added": plan.link, "tags_removed": plan.unlink }),
        )
        .await;
    }

    product_tags(state, product_id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlinks_removed_and_links_added_members() {
        let plan = plan_relink(&[1, 2, 3], &[3, 4, 2, 5]);
        assert_eq!(plan.unlink, vec![1]);
        assert_eq!(plan.link, vec![4, 5]);
    }

    #[test]
    fn same_set_is_a_noop() {
        assert!(plan_relink(&[1, 2], &[2, 1]).is_noop());
    }

    #[test]
    fn duplicates_are_collapsed() {
        let plan = plan_relink(&[7, 7], &[8, 8, 9]);
        assert_eq!(plan.unlink, vec![7]);
        assert_eq!(plan.link, vec![8, 9]);
    }

    #[test]
    fn clearing_the_set_unlinks_everything() {
        let plan: Relink<u8> = plan_relink(&[1, 2], &[]);
        assert_eq!(plan.unlink, vec![1, 2]);
        assert!(plan.link.is_empty());
    }
}
