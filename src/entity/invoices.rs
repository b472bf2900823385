use sea_orm::entity::prelude::*;

use crate::models::{InvoiceType, PaymentMethod};


#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub total_amount: i64,
    pub invoice_type: InvoiceType,
    pub payment_method: PaymentMethod,
    pub invoice_status_id: i64,
    pub order_id: Uuid,
    pub created_by: String,
    pub created_date: DateTimeWithTimeZone,
    pub last_modified_by: Option<String>,
    pub last_modified_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::invoice_statuses::Entity",
        from = "Column::InvoiceStatusId",
        to = "super::invoice_statuses::Column::Id"
    )]
    InvoiceStatuses,
    #[sea_orm(
        belongs_to = "super::orders::Entity",
        from = "Column::OrderId",
        to = "super::orders::Column::Id"
    )]
    Orders,
    #[sea_orm(has_many = "super::shipments::Entity")]
    Shipments,
    #[sea_orm(has_many = "super::invoice_histories::Entity")]
    InvoiceHistories,
}

impl Related<super::invoice_statuses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InvoiceStatuses.def()
    }
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::shipments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shipments.def()
    }
}

impl Related<super::invoice_histories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InvoiceHistories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
