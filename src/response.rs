use axum::http::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use utoipa::ToSchema;

pub const APPLICATION_NAME: &str = "ordermesh";
pub const ALERT_HEADER: HeaderName = HeaderName::from_static("x-ordermesh-alert");
pub const ERROR_HEADER: HeaderName = HeaderName::from_static("x-ordermesh-error");
pub const ALERT_PARAMS_HEADER: HeaderName = HeaderName::from_static("x-ordermesh-params");

#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct Meta {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub total: Option<i64>,
}

impl Meta {
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
            total: Some(total),
        }
    }

    pub fn empty() -> Self {
        Self {
            page: None,
            per_page: None,
            total: None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ItemList<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CountData {
    pub count: u64,
}

/// Success alert headers sent on writes.
pub mod alert {
    use super::*;

    pub fn created(entity_name: &str, id: &str) -> HeaderMap {
        headers(
            &format!("{APPLICATION_NAME}.{entity_name}.created"),
            id,
        )
    }

    pub fn updated(entity_name: &str, id: &str) -> HeaderMap {
        headers(
            &format!("{APPLICATION_NAME}.{entity_name}.updated"),
            id,
        )
    }

    pub fn deleted(entity_name: &str, id: &str) -> HeaderMap {
        headers(
            &format!("{APPLICATION_NAME}.{entity_name}.deleted"),
            id,
        )
    }

    fn headers(message: &str, param: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(message) {
            headers.insert(ALERT_HEADER, value);
        }
        if let Ok(value) = HeaderValue::from_str(param) {
            headers.insert(ALERT_PARAMS_HEADER, value);
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_alert_names_entity_and_id() {
        let headers = alert::created("address", "42");
        assert_eq!(headers[ALERT_HEADER], "ordermesh.address.created");
        assert_eq!(headers[ALERT_PARAMS_HEADER], "42");
    }

    #[test]
    fn meta_new_sets_all_fields() {
        let meta = Meta::new(2, 20, 41);
        assert_eq!(meta.page, Some(2));
        assert_eq!(meta.per_page, Some(20));
        assert_eq!(meta.total, Some(41));
    }
}
