use sea_orm::entity::prelude::*;

use crate::models::StaffStatus;


#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "staff_infos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub status: StaffStatus,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub working_unit_id: Option<Uuid>,
    pub created_by: String,
    pub created_date: DateTimeWithTimeZone,
    pub last_modified_by: Option<String>,
    pub last_modified_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::working_units::Entity",
        from = "Column::WorkingUnitId",
        to = "super::working_units::Column::Id"
    )]
    WorkingUnits,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::working_units::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkingUnits.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
