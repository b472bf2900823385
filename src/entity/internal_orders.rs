use sea_orm::entity::prelude::*;

use crate::models::InternalOrderType;


/// Work order raised inside the company to fulfil a customer order.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "internal_orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub internal_order_type: InternalOrderType,
    pub note: Option<String>,
    pub order_status_id: i64,
    pub root_order_id: Uuid,
    pub created_by: String,
    pub created_date: DateTimeWithTimeZone,
    pub last_modified_by: Option<String>,
    pub last_modified_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order_statuses::Entity",
        from = "Column::OrderStatusId",
        to = "super::order_statuses::Column::Id"
    )]
    OrderStatuses,
    #[sea_orm(
        belongs_to = "super::orders::Entity",
        from = "Column::RootOrderId",
        to = "super::orders::Column::Id"
    )]
    Orders,
    #[sea_orm(has_many = "super::internal_order_items::Entity")]
    InternalOrderItems,
    #[sea_orm(has_many = "super::internal_order_histories::Entity")]
    InternalOrderHistories,
}

impl Related<super::order_statuses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderStatuses.def()
    }
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::internal_order_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InternalOrderItems.def()
    }
}

impl Related<super::internal_order_histories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InternalOrderHistories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
