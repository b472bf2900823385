use sea_orm::entity::prelude::*;


/// A colour variant of a product.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product_categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub image_uri: Option<String>,
    pub product_id: Uuid,
    pub colour_id: Uuid,
    pub created_by: String,
    pub created_date: DateTimeWithTimeZone,
    pub last_modified_by: Option<String>,
    pub last_modified_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::products::Entity",
        from = "Column::ProductId",
        to = "super::products::Column::Id"
    )]
    Products,
    #[sea_orm(
        belongs_to = "super::colours::Entity",
        from = "Column::ColourId",
        to = "super::colours::Column::Id"
    )]
    Colours,
    #[sea_orm(has_many = "super::product_quantities::Entity")]
    ProductQuantities,
    #[sea_orm(has_many = "super::order_items::Entity")]
    OrderItems,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl Related<super::colours::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Colours.def()
    }
}

impl Related<super::product_quantities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductQuantities.def()
    }
}

impl Related<super::order_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
