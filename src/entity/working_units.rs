use sea_orm::entity::prelude::*;

use crate::models::WorkingUnitType;


/// A warehouse, store or office holding stock and staff.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "working_units")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub unit_type: WorkingUnitType,
    pub image_uri: Option<String>,
    pub address_id: Option<Uuid>,
    pub created_by: String,
    pub created_date: DateTimeWithTimeZone,
    pub last_modified_by: Option<String>,
    pub last_modified_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::addresses::Entity",
        from = "Column::AddressId",
        to = "super::addresses::Column::Id"
    )]
    Addresses,
    #[sea_orm(has_many = "super::product_quantities::Entity")]
    ProductQuantities,
    #[sea_orm(has_many = "super::staff_infos::Entity")]
    StaffInfos,
}

impl Related<super::addresses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Addresses.def()
    }
}

impl Related<super::product_quantities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductQuantities.def()
    }
}

impl Related<super::staff_infos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StaffInfos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
