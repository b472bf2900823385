use sea_orm::entity::prelude::*;


/// Stock level of one product category in one working unit.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product_quantities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub qty: i32,
    pub working_unit_id: Uuid,
    pub product_category_id: Uuid,
    pub created_by: String,
    pub created_date: DateTimeWithTimeZone,
    pub last_modified_by: Option<String>,
    pub last_modified_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::working_units::Entity",
        from = "Column::WorkingUnitId",
        to = "super::working_units::Column::Id"
    )]
    WorkingUnits,
    #[sea_orm(
        belongs_to = "super::product_categories::Entity",
        from = "Column::ProductCategoryId",
        to = "super::product_categories::Column::Id"
    )]
    ProductCategories,
}

impl Related<super::working_units::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkingUnits.def()
    }
}

impl Related<super::product_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductCategories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
