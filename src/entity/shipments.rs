use sea_orm::entity::prelude::*;

use crate::models::ShipmentType;


#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "shipments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub shipment_type: ShipmentType,
    pub shipment_date: Option<DateTimeWithTimeZone>,
    pub note: Option<String>,
    pub shipment_status_id: i64,
    pub order_id: Uuid,
    pub invoice_id: Option<Uuid>,
    pub created_by: String,
    pub created_date: DateTimeWithTimeZone,
    pub last_modified_by: Option<String>,
    pub last_modified_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::shipment_statuses::Entity",
        from = "Column::ShipmentStatusId",
        to = "super::shipment_statuses::Column::Id"
    )]
    ShipmentStatuses,
    #[sea_orm(
        belongs_to = "super::orders::Entity",
        from = "Column::OrderId",
        to = "super::orders::Column::Id"
    )]
    Orders,
    #[sea_orm(
        belongs_to = "super::invoices::Entity",
        from = "Column::InvoiceId",
        to = "super::invoices::Column::Id"
    )]
    Invoices,
    #[sea_orm(has_many = "super::shipment_items::Entity")]
    ShipmentItems,
    #[sea_orm(has_many = "super::shipment_assignments::Entity")]
    ShipmentAssignments,
    #[sea_orm(has_many = "super::shipment_histories::Entity")]
    ShipmentHistories,
}

impl Related<super::shipment_statuses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShipmentStatuses.def()
    }
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::invoices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoices.def()
    }
}

impl Related<super::shipment_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShipmentItems.def()
    }
}

impl Related<super::shipment_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShipmentAssignments.def()
    }
}

impl Related<super::shipment_histories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShipmentHistories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
