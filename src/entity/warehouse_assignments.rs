use sea_orm::entity::prelude::*;

use crate::models::AssignmentStatus;


/// Moves the stock of an order from one working unit to another.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "warehouse_assignments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub status: AssignmentStatus,
    pub note: Option<String>,
    pub source_working_unit_id: Uuid,
    pub target_working_unit_id: Uuid,
    pub order_id: Uuid,
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
    #[sea_orm(belongs_to = "super::working_units::Entity", from = "Column::SourceWorkingUnitId", to = "super::working_units::Column::Id")]
    SourceWorkingUnit,
    #[sea_orm(belongs_to = "super::working_units::Entity", from = "Column::TargetWorkingUnitId", to = "super::working_units::Column::Id")]
    TargetWorkingUnit,
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
