use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::AuditInfo;
use crate::{entity::invoices::{ActiveModel, Model}, models::{InvoiceType, PaymentMethod}};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct InvoiceDto {
    pub id: Option<Uuid>,
    /// Total in minor currency units.
    #[validate(range(min = 0))]
    pub total_amount: i64,
    pub invoice_type: InvoiceType,
    pub payment_method: PaymentMethod,
    pub invoice_status_id: i64,
    pub order_id: Uuid,
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    pub audit: Option<AuditInfo>,
}

impl From<Model> for InvoiceDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            total_amount: model.total_amount,
            invoice_type: model.invoice_type,
            payment_method: model.payment_method,
            invoice_status_id: model.invoice_status_id,
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

impl InvoiceDto {
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            total_amount: Set(self.total_amount),
            invoice_type: Set(self.invoice_type),
            payment_method: Set(self.payment_method),
            invoice_status_id: Set(self.invoice_status_id),
            order_id: Set(self.order_id),
            ..Default::default()
        }
    }
}
