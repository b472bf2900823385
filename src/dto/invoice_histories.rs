use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::AuditInfo;
use crate::entity::invoice_histories::{ActiveModel, Model};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct InvoiceHistoryDto {
    pub id: Option<Uuid>,
    #[validate(length(max = 1000))]
    pub note: Option<String>,
    pub invoice_id: Uuid,
    pub invoice_status_id: i64,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for InvoiceHistoryDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            note: model.note,
            invoice_id: model.invoice_id,
            invoice_status_id: model.invoice_status_id,
            audit: Some(AuditInfo::new(
                model.created_by,
                model.created_date,
                model.last_modified_by,
                model.last_modified_date,
            )),
        }
    }
}

impl InvoiceHistoryDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            note: Set(self.note),
            invoice_id: Set(self.invoice_id),
            invoice_status_id: Set(self.invoice_status_id),
            ..Default::default()
        }
    }
}
