use sea_orm::entity::prelude::*;

use crate::models::OrderType;


#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub order_type: OrderType,
    pub priority: i32,
    pub internal_notes: Option<String>,
    pub customer_notes: Option<String>,
    pub customer_id: Uuid,
    pub order_status_id: i64,
    pub address_id: Option<Uuid>,
    pub parent_id: Option<Uuid>,
    pub created_by: String,
    pub created_date: DateTimeWithTimeZone,
    pub last_modified_by: Option<String>,
    pub last_modified_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CustomerId",
        to = "super::users::Column::Id"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::order_statuses::Entity",
        from = "Column::OrderStatusId",
        to = "super::order_statuses::Column::Id"
    )]
    OrderStatuses,
    #[sea_orm(
        belongs_to = "super::addresses::Entity",
        from = "Column::AddressId",
        to = "super::addresses::Column::Id"
    )]
    Addresses,
    #[sea_orm(belongs_to = "Entity", from = "Column::ParentId", to = "Column::Id")]
    Parent,
    #[sea_orm(has_many = "super::order_items::Entity")]
    OrderItems,
    #[sea_orm(has_many = "super::invoices::Entity")]
    Invoices,
    #[sea_orm(has_many = "super::shipments::Entity")]
    Shipments,
    #[sea_orm(has_many = "super::order_histories::Entity")]
    OrderHistories,
    #[sea_orm(has_many = "super::internal_orders::Entity")]
    InternalOrders,
    #[sea_orm(has_many = "super::warehouse_assignments::Entity")]
    WarehouseAssignments,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::order_statuses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderStatuses.def()
    }
}

impl Related<super::addresses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Addresses.def()
    }
}

impl Related<super::order_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl Related<super::invoices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoices.def()
    }
}

impl Related<super::shipments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shipments.def()
    }
}

impl Related<super::order_histories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderHistories.def()
    }
}

impl Related<super::internal_orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InternalOrders.def()
    }
}

impl Related<super::warehouse_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WarehouseAssignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
