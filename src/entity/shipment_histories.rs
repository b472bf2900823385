use sea_orm::entity::prelude::*;


#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "shipment_histories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub note: Option<String>,
    pub shipment_id: Uuid,
    pub shipment_status_id: i64,
    pub created_by: String,
    pub created_date: DateTimeWithTimeZone,
    pub last_modified_by: Option<String>,
    pub last_modified_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::shipments::Entity",
        from = "Column::ShipmentId",
        to = "super::shipments::Column::Id"
    )]
    Shipments,
    #[sea_orm(
        belongs_to = "super::shipment_statuses::Entity",
        from = "Column::ShipmentStatusId",
        to = "super::shipment_statuses::Column::Id"
    )]
    ShipmentStatuses,
}

impl Related<super::shipments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shipments.def()
    }
}

impl Related<super::shipment_statuses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShipmentStatuses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
