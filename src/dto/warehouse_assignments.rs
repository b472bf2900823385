use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::AuditInfo;
use crate::{entity::warehouse_assignments::{ActiveModel, Model}, models::AssignmentStatus};

/// Moves the stock of an order from one working unit to another.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_distinct_units"))]
pub struct WarehouseAssignmentDto {
    pub id: Option<Uuid>,
    pub status: AssignmentStatus,
    #[validate(length(max = 1000))]
    pub note: Option<String>,
    pub source_working_unit_id: Uuid,
    pub target_working_unit_id: Uuid,
    pub order_id: Uuid,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for WarehouseAssignmentDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            status: model.status,
            note: model.note,
            source_working_unit_id: model.source_working_unit_id,
            target_working_unit_id: model.target_working_unit_id,
            order_id: model.order_id,
            audit: Some(AuditInfo::new(
                model.created_by,
                model.created_date,
                model.last_modified_by,
                model.last_modified_date,
            )),
        }
    }
}

impl WarehouseAssignmentDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            status: Set(self.status),
            note: Set(self.note),
            source_working_unit_id: Set(self.source_working_unit_id),
            target_working_unit_id: Set(self.target_working_unit_id),
            order_id: Set(self.order_id),
            ..Default::default()
        }
    }
}

fn validate_distinct_units(dto: &WarehouseAssignmentDto) -> Result<(), ValidationError> {
    if dto.source_working_unit_id == dto.target_working_unit_id {
        return Err(ValidationError::new("distinct_units")
            .with_message("source and target working units must differ".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(source: Uuid, target: Uuid) -> WarehouseAssignmentDto {
        WarehouseAssignmentDto {
            id: None,
            status: AssignmentStatus::Pending,
            note: None,
            source_working_unit_id: source,
            target_working_unit_id: target,
            order_id: Uuid::new_v4(),
            audit: None,
        }
    }

    #[test]
    fn same_source_and_target_is_rejected() {
        let unit = Uuid::new_v4();
        assert!(assignment(unit, unit).validate().is_err());
    }

    #[test]
    fn distinct_units_pass() {
        assert!(assignment(Uuid::new_v4(), Uuid::new_v4()).validate().is_ok());
    }
}
