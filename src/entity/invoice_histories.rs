use sea_orm::entity::prelude::*;


#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "invoice_histories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub note: Option<String>,
    pub invoice_id: Uuid,
    pub invoice_status_id: i64,
    pub created_by: String,
    pub created_date: DateTimeWithTimeZone,
    pub last_modified_by: Option<String>,
    pub last_modified_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::invoices::Entity",
        from = "Column::InvoiceId",
        to = "super::invoices::Column::Id"
    )]
    Invoices,
    #[sea_orm(
        belongs_to = "super::invoice_statuses::Entity",
        from = "Column::InvoiceStatusId",
        to = "super::invoice_statuses::Column::Id"
    )]
    InvoiceStatuses,
}

impl Related<super::invoices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoices.def()
    }
}

impl Related<super::invoice_statuses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InvoiceStatuses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
