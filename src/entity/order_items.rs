use sea_orm::entity::prelude::*;


#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "order_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub ordered_qty: i32,
    pub received_qty: Option<i32>,
    pub unit_price: i64,
    pub order_id: Uuid,
    pub product_category_id: Uuid,
    pub created_by: String,
    pub created_date: DateTimeWithTimeZone,
    pub last_modified_by: Option<String>,
    pub last_modified_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::orders::Entity",
        from = "Column::OrderId",
        to = "super::orders::Column::Id"
    )]
    Orders,
    #[sea_orm(
        belongs_to = "super::product_categories::Entity",
        from = "Column::ProductCategoryId",
        to = "super::product_categories::Column::Id"
    )]
    ProductCategories,
    #[sea_orm(has_many = "super::shipment_items::Entity")]
    ShipmentItems,
    #[sea_orm(has_many = "super::internal_order_items::Entity")]
    InternalOrderItems,
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::product_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductCategories.def()
    }
}

impl Related<super::shipment_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShipmentItems.def()
    }
}

impl Related<super::internal_order_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InternalOrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
