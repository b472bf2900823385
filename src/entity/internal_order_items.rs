use sea_orm::entity::prelude::*;


#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "internal_order_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub qty: i32,
    pub note: Option<String>,
    pub internal_order_id: Uuid,
    pub order_item_id: Uuid,
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
        belongs_to = "super::order_items::Entity",
        from = "Column::OrderItemId",
        to = "super::order_items::Column::Id"
    )]
    OrderItems,
}

impl Related<super::internal_orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InternalOrders.def()
    }
}

impl Related<super::order_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
