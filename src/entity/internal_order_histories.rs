use sea_orm::entity::prelude::*;


#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "internal_order_histories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub note: Option<String>,
    pub internal_order_id: Uuid,
    pub order_status_id: i64,
    pub created_by: String,
    pub created_date: DateTimeWithTimeZone,
    pub last_modified_by: Option<String>,
    pub last_modified_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::internal_orders::Entity",
        from = "Column::InternalOrderId",
        to = "super::internal_orders::Column::Id"
    )]
    InternalOrders,
    #[sea_orm(
        belongs_to = "super::order_statuses::Entity",
        from = "Column::OrderStatusId",
        to = "super::order_statuses::Column::Id"
    )]
    OrderStatuses,
}

impl Related<super::internal_orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InternalOrders.def()
    }
}

impl Related<super::order_statuses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderStatuses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
