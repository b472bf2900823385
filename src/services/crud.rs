//! Identifier checks and merge-patch shared by every resource.

use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Key type of a resource table.
pub trait EntityKey: Copy + PartialEq + std::fmt::Display {
    /// A key assigned before insert, or `None` when the database generates it.
    fn generate() -> Option<Self>;
}

impl EntityKey for Uuid {
    fn generate() -> Option<Self> {
        Some(Uuid::new_v4())
    }
}

impl EntityKey for i64 {
    fn generate() -> Option<Self> {
        None
    }
}

/// New records must not carry an identifier.
pub fn ensure_new<K: EntityKey>(entity_name: &'static str, id: Option<K>) -> AppResult<()> {
    if id.is_some() {
        return Err(AppError::bad_request_alert(
            entity_name,
            "idexists",
            format!("A new {entity_name} cannot already have an ID"),
        ));
    }
    Ok(())
}

/// The body identifier must be present and equal to the path identifier.
pub fn ensure_matching_id<K: EntityKey>(
    entity_name: &'static str,
    path_id: K,
    body_id: Option<K>,
) -> AppResult<()> {
    match body_id {
        None => Err(AppError::bad_request_alert(entity_name, "idnull", "Invalid id")),
        Some(id) if id != path_id => {
            Err(AppError::bad_request_alert(entity_name, "idinvalid", "Invalid ID"))
        }
        Some(_) => Ok(()),
    }
}

/// Read the `id` member of a patch document.
pub fn patch_id<K: EntityKey + DeserializeOwned>(
    entity_name: &'static str,
    patch: &Value,
) -> AppResult<Option<K>> {
    match patch.get("id") {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => serde_json::from_value(raw.clone())
            .map(Some)
            .map_err(|_| AppError::bad_request_alert(entity_name, "idinvalid", "Invalid ID")),
    }
}

/// Merge `patch` into `target`. Members that are absent or `null` in the patch
/// keep their current value; objects merge recursively.
pub fn merge_patch(target: &mut Value, patch: Value) {
    let Value::Object(patch) = patch else {
        if !patch.is_null() {
            *target = patch;
        }
        return;
    };

    if !target.is_object() {
        *target = Value::Object(serde_json::Map::new());
    }
    if let Value::Object(target) = target {
        for (key, value) in patch {
            match value {
                Value::Null => {}
                Value::Object(_) => {
                    let slot = target.entry(key).or_insert(Value::Null);
                    merge_patch(slot, value);
                }
                other => {
                    target.insert(key, other);
                }
            }
        }
    }
}

/// Deserialize a merged document back into its DTO.
pub fn from_merged<T: DeserializeOwned>(merged: Value) -> AppResult<T> {
    serde_json::from_value(merged).map_err(|err| AppError::BadRequest(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_with_identifier_is_rejected() {
        let err = ensure_new("address", Some(Uuid::new_v4())).unwrap_err();
        assert_eq!(err.error_key(), Some("idexists"));
        assert!(ensure_new::<Uuid>("address", None).is_ok());
    }

    #[test]
    fn update_requires_matching_identifier() {
        let id = Uuid::new_v4();
        assert!(ensure_matching_id("order", id, Some(id)).is_ok());

        let err = ensure_matching_id("order", id, None).unwrap_err();
        assert_eq!(err.error_key(), Some("idnull"));

        let err = ensure_matching_id("order", id, Some(Uuid::new_v4())).unwrap_err();
        assert_eq!(err.error_key(), Some("idinvalid"));
    }

    #[test]
    fn serial_keys_are_left_to_the_database() {
        assert!(<i64 as EntityKey>::generate().is_none());
        assert!(<Uuid as EntityKey>::generate().is_some());
        let err = ensure_matching_id("orderStatus", 4i64, Some(5)).unwrap_err();
        assert_eq!(err.error_key(), Some("idinvalid"));
    }

    #[test]
    fn patch_id_reads_typed_identifier() {
        let id = Uuid::new_v4();
        assert_eq!(patch_id::<Uuid>("tag", &json!({ "id": id })).unwrap(), Some(id));
        assert_eq!(patch_id::<Uuid>("tag", &json!({ "name": "x" })).unwrap(), None);
        assert_eq!(patch_id::<i64>("tag", &json!({ "id": null })).unwrap(), None);
        assert!(patch_id::<i64>("tag", &json!({ "id": "seven" })).is_err());
    }

    #[test]
    fn merge_patch_overrides_present_members_only() {
        let mut current = json!({
            "id": 1,
            "line1": "1 Main St",
            "line2": "Unit 4",
            "city": "Springfield"
        });
        merge_patch(&mut current, json!({ "city": "Shelbyville", "line2": null }));
        assert_eq!(
            current,
            json!({
                "id": 1,
                "line1": "1 Main St",
                "line2": "Unit 4",
                "city": "Shelbyville"
            })
        );
    }

    #[test]
    fn merge_patch_recurses_into_objects() {
        let mut current = json!({ "audit": { "created_by": "system", "note": "a" } });
        merge_patch(&mut current, json!({ "audit": { "note": "b" }, "extra": [1, 2] }));
        assert_eq!(
            current,
            json!({ "audit": { "created_by": "system", "note": "b" }, "extra": [1, 2] })
        );
    }
}
