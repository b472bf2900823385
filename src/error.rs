use axum::{
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use sea_orm::SqlErr;
use serde::Serialize;
use thiserror::Error;

use crate::response::{ALERT_PARAMS_HEADER, ApiResponse, ERROR_HEADER, Meta};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    /// A client error tied to one entity, reported with an `error.<key>` code.
    #[error("{message}")]
    Alert {
        status: StatusCode,
        entity_name: &'static str,
        error_key: &'static str,
        message: String,
    },

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("ORM error")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn bad_request_alert(
        entity_name: &'static str,
        error_key: &'static str,
        message: impl Into<String>,
    ) -> Self {
        AppError::Alert {
            status: StatusCode::BAD_REQUEST,
            entity_name,
            error_key,
            message: message.into(),
        }
    }

    pub fn not_found_alert(entity_name: &'static str) -> Self {
        AppError::Alert {
            status: StatusCode::NOT_FOUND,
            entity_name,
            error_key: "idnotfound",
            message: "Entity not found".to_string(),
        }
    }

    /// The `error.<key>` code for alert errors.
    pub fn error_key(&self) -> Option<&'static str> {
        match self {
            AppError::Alert { error_key, .. } => Some(error_key),
            _ => None,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Alert { status, .. } => *status,
            AppError::OrmError(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => StatusCode::CONFLICT,
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::OrmError(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    "Value already exists for a unique field".to_string()
                }
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    "Referenced entity does not exist or is still referenced".to_string()
                }
                _ => self.to_string(),
            },
            _ => self.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    entity_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_key: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        }

        let mut headers = HeaderMap::new();
        let (entity_name, error_key) = match &self {
            AppError::Alert {
                entity_name,
                error_key,
                ..
            } => {
                if let Ok(value) = HeaderValue::from_str(&format!("error.{error_key}")) {
                    headers.insert(ERROR_HEADER, value);
                }
                headers.insert(ALERT_PARAMS_HEADER, HeaderValue::from_static(*entity_name));
                (Some(*entity_name), Some(format!("error.{error_key}")))
            }
            _ => (None, None),
        };

        let error = match &self {
            AppError::Validation(errors) => errors.to_string(),
            _ => message.clone(),
        };

        let body = ApiResponse {
            message,
            data: Some(ErrorData {
                error,
                entity_name,
                error_key,
            }),
            meta: Some(Meta::empty()),
        };

        (status, headers, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
