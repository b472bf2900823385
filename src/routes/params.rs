use std::collections::HashMap;

use sea_orm::Order;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    /// Page number, default 1.
    pub page: Option<i64>,
    /// Items per page, default 20, at most 100.
    pub per_page: Option<i64>,
}

impl Pagination {
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1).saturating_mul(per_page);
        (page, per_page, offset)
    }

    /// Read `page` / `per_page` out of a raw query map.
    pub fn from_params(params: &HashMap<String, String>) -> AppResult<Self> {
        Ok(Self {
            page: parse_opt(params, "page")?,
            per_page: parse_opt(params, "per_page")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(raw: &str) -> AppResult<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(AppError::BadRequest(format!("unknown sort order '{other}'"))),
        }
    }
}

impl From<SortOrder> for Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

fn parse_opt(params: &HashMap<String, String>, key: &str) -> AppResult<Option<i64>> {
    params
        .get(key)
        .map(|raw| {
            raw.parse::<i64>()
                .map_err(|_| AppError::BadRequest(format!("'{key}' must be an integer")))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_clamps_page_and_size() {
        let p = Pagination {
            page: Some(0),
            per_page: Some(500),
        };
        assert_eq!(p.normalize(), (1, 100, 0));

        let p = Pagination {
            page: Some(3),
            per_page: None,
        };
        assert_eq!(p.normalize(), (3, 20, 40));
    }

    #[test]
    fn huge_page_saturates_the_offset() {
        let params = HashMap::from([("page".to_string(), i64::MAX.to_string())]);
        let (page, per_page, offset) = Pagination::from_params(&params).unwrap().normalize();
        assert_eq!((page, per_page), (i64::MAX, 20));
        assert_eq!(offset, i64::MAX);
    }

    #[test]
    fn from_params_rejects_non_numeric_page() {
        let params = HashMap::from([("page".to_string(), "two".to_string())]);
        assert!(Pagination::from_params(&params).is_err());
    }

    #[test]
    fn sort_order_is_case_insensitive() {
        assert_eq!(SortOrder::parse("DESC").unwrap(), SortOrder::Desc);
        assert!(SortOrder::parse("sideways").is_err());
    }
}
