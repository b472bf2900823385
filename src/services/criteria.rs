//! Query-string filtering for list, count and search endpoints.
//!
//! Filters take the form `<field>.<op>=<value>`, e.g. `priority.greaterThan=10`
//! or `order_id.in=<uuid>,<uuid>`. Values are typed from the column definition.

use std::{collections::HashMap, str::FromStr};

use chrono::DateTime;
use sea_orm::{
    ColumnTrait, ColumnType, Condition, Value,
    sea_query::{Expr, SimpleExpr, extension::postgres::PgExpr},
};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    routes::params::{Pagination, SortOrder},
};

/// Query keys that are not column filters.
const RESERVED: [&str; 5] = ["page", "per_page", "sort_by", "sort_order", "query"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Equals,
    NotEquals,
    In,
    NotIn,
    Contains,
    DoesNotContain,
    Specified,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl FromStr for FilterOp {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s {
            "equals" => FilterOp::Equals,
            "notEquals" => FilterOp::NotEquals,
            "in" => FilterOp::In,
            "notIn" => FilterOp::NotIn,
            "contains" => FilterOp::Contains,
            "doesNotContain" => FilterOp::DoesNotContain,
            "specified" => FilterOp::Specified,
            "greaterThan" => FilterOp::GreaterThan,
            "greaterThanOrEqual" => FilterOp::GreaterThanOrEqual,
            "lessThan" => FilterOp::LessThan,
            "lessThanOrEqual" => FilterOp::LessThanOrEqual,
            other => return Err(AppError::BadRequest(format!("unknown filter '{other}'"))),
        };
        Ok(op)
    }
}

/// Parsed list request: paging, ordering and the filter condition.
#[derive(Debug)]
pub struct ListQuery<C> {
    pub pagination: Pagination,
    pub sort: Option<(C, SortOrder)>,
    pub condition: Condition,
}

impl<C> ListQuery<C>
where
    C: ColumnTrait + FromStr,
{
    pub fn from_params(params: &HashMap<String, String>) -> AppResult<Self> {
        let pagination = Pagination::from_params(params)?;
        let order = params
            .get("sort_order")
            .map(|raw| SortOrder::parse(raw))
            .transpose()?
            .unwrap_or(SortOrder::Asc);
        let sort = params
            .get("sort_by")
            .map(|field| column::<C>(field).map(|col| (col, order)))
            .transpose()?;
        Ok(Self {
            pagination,
            sort,
            condition: filter_condition::<C>(params)?,
        })
    }
}

/// All `<field>.<op>` filters in `params`, AND-ed together.
pub fn filter_condition<C>(params: &HashMap<String, String>) -> AppResult<Condition>
where
    C: ColumnTrait + FromStr,
{
    let mut keys: Vec<&String> = params
        .keys()
        .filter(|k| !RESERVED.contains(&k.as_str()))
        .collect();
    keys.sort();

    let mut condition = Condition::all();
    for key in keys {
        let (field, op) = key
            .rsplit_once('.')
            .ok_or_else(|| AppError::BadRequest(format!("filter '{key}' must be <field>.<op>")))?;
        let col = column::<C>(field)?;
        let op = op.parse::<FilterOp>()?;
        condition = condition.add(filter_expr(col, op, &params[key])?);
    }
    Ok(condition)
}

/// Case-insensitive substring match of `query` across `columns`.
pub fn search_condition<C: ColumnTrait>(columns: &[C], query: &str) -> Condition {
    let pattern = like_pattern(query.trim());
    columns.iter().fold(Condition::any(), |cond, col| {
        cond.add(Expr::col(*col).ilike(pattern.clone()))
    })
}

fn column<C: FromStr>(field: &str) -> AppResult<C> {
    C::from_str(field).map_err(|_| AppError::BadRequest(format!("unknown field '{field}'")))
}

fn filter_expr<C: ColumnTrait>(col: C, op: FilterOp, raw: &str) -> AppResult<SimpleExpr> {
    let expr = match op {
        FilterOp::Equals => col.eq(typed_value(&col, raw)?),
        FilterOp::NotEquals => col.ne(typed_value(&col, raw)?),
        FilterOp::In => col.is_in(typed_values(&col, raw)?),
        FilterOp::NotIn => col.is_not_in(typed_values(&col, raw)?),
        FilterOp::Contains => Expr::col(textual(col)?).ilike(like_pattern(raw)),
        FilterOp::DoesNotContain => Expr::col(textual(col)?).not_ilike(like_pattern(raw)),
        FilterOp::Specified => match parse_bool(raw)? {
            true => col.is_not_null(),
            false => col.is_null(),
        },
        FilterOp::GreaterThan => col.gt(typed_value(&col, raw)?),
        FilterOp::GreaterThanOrEqual => col.gte(typed_value(&col, raw)?),
        FilterOp::LessThan => col.lt(typed_value(&col, raw)?),
        FilterOp::LessThanOrEqual => col.lte(typed_value(&col, raw)?),
    };
    Ok(expr)
}

/// Substring matching only applies to character columns.
fn textual<C: ColumnTrait>(col: C) -> AppResult<C> {
    match col.def().get_column_type() {
        ColumnType::String(_) | ColumnType::Text | ColumnType::Char(_) => Ok(col),
        _ => Err(AppError::BadRequest(format!(
            "'{}' does not support substring filters",
            col.as_str()
        ))),
    }
}

/// `%raw%` with the LIKE wildcards in `raw` taken literally.
fn like_pattern(raw: &str) -> String {
    let mut pattern = String::with_capacity(raw.len() + 2);
    pattern.push('%');
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn typed_values<C: ColumnTrait>(col: &C, raw: &str) -> AppResult<Vec<Value>> {
    raw.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| typed_value(col, v))
        .collect()
}

/// Convert a query-string value into the column's SQL type.
fn typed_value<C: ColumnTrait>(col: &C, raw: &str) -> AppResult<Value> {
    let invalid = || AppError::BadRequest(format!("invalid value '{raw}' for '{}'", col.as_str()));
    let value = match col.def().get_column_type() {
        ColumnType::Uuid => Value::from(Uuid::parse_str(raw).map_err(|_| invalid())?),
        ColumnType::TinyInteger | ColumnType::SmallInteger | ColumnType::Integer => {
            Value::from(raw.parse::<i32>().map_err(|_| invalid())?)
        }
        ColumnType::BigInteger => Value::from(raw.parse::<i64>().map_err(|_| invalid())?),
        ColumnType::Boolean => Value::from(parse_bool(raw).map_err(|_| invalid())?),
        ColumnType::Timestamp | ColumnType::TimestampWithTimeZone => {
            Value::from(DateTime::parse_from_rfc3339(raw).map_err(|_| invalid())?)
        }
        _ => Value::from(raw.to_string()),
    };
    Ok(value)
}

fn parse_bool(raw: &str) -> AppResult<bool> {
    raw.parse::<bool>()
        .map_err(|_| AppError::BadRequest(format!("'{raw}' is not a boolean")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{order_items, orders};
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn sql(condition: Condition) -> String {
        orders::Entity::find()
            .filter(condition)
            .build(DbBackend::Postgres)
            .to_string()
    }

    #[test]
    fn parses_paging_sorting_and_filters() {
        let query = ListQuery::<orders::Column>::from_params(&params(&[
            ("page", "2"),
            ("per_page", "5"),
            ("sort_by", "priority"),
            ("sort_order", "desc"),
            ("priority.greaterThan", "10"),
        ]))
        .unwrap();
        assert_eq!(query.pagination.normalize(), (2, 5, 5));
        assert!(matches!(
            query.sort,
            Some((orders::Column::Priority, SortOrder::Desc))
        ));
        assert!(sql(query.condition).contains(r#""priority" > 10"#));
    }

    #[test]
    fn camel_case_field_names_resolve() {
        let condition =
            filter_condition::<order_items::Column>(&params(&[("orderedQty.equals", "3")])).unwrap();
        let sql = order_items::Entity::find()
            .filter(condition)
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#""ordered_qty" = 3"#));
    }

    #[test]
    fn in_filter_types_each_value() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let condition = filter_condition::<orders::Column>(&params(&[(
            "customer_id.in",
            &format!("{a},{b}"),
        )]))
        .unwrap();
        let sql = sql(condition);
        assert!(sql.contains(&a.to_string()));
        assert!(sql.contains(&b.to_string()));
        assert!(sql.contains("IN"));
    }

    #[test]
    fn specified_maps_to_null_checks() {
        let condition =
            filter_condition::<orders::Column>(&params(&[("parent_id.specified", "false")]))
                .unwrap();
        let sql = sql(condition);
        assert!(sql.contains(r#""parent_id" IS NULL"#));
    }

    #[test]
    fn rejects_unknown_fields_ops_and_bad_values() {
        assert!(filter_condition::<orders::Column>(&params(&[("colour.equals", "red")])).is_err());
        assert!(filter_condition::<orders::Column>(&params(&[("priority.near", "1")])).is_err());
        assert!(filter_condition::<orders::Column>(&params(&[("priority.equals", "high")])).is_err());
        assert!(filter_condition::<orders::Column>(&params(&[("priority", "1")])).is_err());
        assert!(filter_condition::<orders::Column>(&params(&[("priority.contains", "5")])).is_err());
        assert!(
            filter_condition::<orders::Column>(&params(&[("customer_id.doesNotContain", "ab")]))
                .is_err()
        );
    }

    #[test]
    fn contains_applies_to_text_columns() {
        let condition =
            filter_condition::<orders::Column>(&params(&[("internal_notes.contains", "rush")]))
                .unwrap();
        assert!(sql(condition).contains(r#""internal_notes" ILIKE '%rush%'"#));
    }

    #[test]
    fn like_wildcards_in_user_text_are_escaped() {
        assert_eq!(like_pattern("50%"), r"%50\%%");
        assert_eq!(like_pattern("a_b"), r"%a\_b%");
        assert_eq!(like_pattern(r"c:\d"), r"%c:\\d%");
        assert_eq!(like_pattern("plain"), "%plain%");
    }

    #[test]
    fn search_ors_over_columns() {
        let sql = sql(search_condition(
            &[orders::Column::InternalNotes, orders::Column::CustomerNotes],
            "fragile",
        ));
        assert!(sql.contains("ILIKE '%fragile%'"));
        assert!(sql.contains(" OR "));
    }
}
