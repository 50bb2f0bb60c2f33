//! Open-ended record representation
//!
//! Records arrive from the backend as JSON objects whose shape depends on
//! the entity type. They stay schema-less: the form works from the field
//! schema, the table from the keys of the records themselves.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A record as returned by the backend, keys in the order they were received
pub type EntityRecord = Map<String, Value>;

/// Identifier value of a record (number or string)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Value);

impl RecordId {
    /// Identifier of `record` under `id_field`; `None` when absent or null
    pub fn of(record: &EntityRecord, id_field: &str) -> Option<Self> {
        match record.get(id_field) {
            None | Some(Value::Null) => None,
            Some(value) => Some(Self(value.clone())),
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Does `record` carry this identifier under `id_field`?
    pub fn matches(&self, record: &EntityRecord, id_field: &str) -> bool {
        record.get(id_field) == Some(&self.0)
    }

    /// Unescaped text used to build a URL path segment
    pub fn as_path_text(&self) -> String {
        match &self.0 {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_path_text())
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(Value::from(id))
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(Value::from(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> EntityRecord {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn extracts_identifier_from_record() {
        let r = record(json!({"id_producto": 7, "nombre": "Widget"}));
        let id = RecordId::of(&r, "id_producto").unwrap();
        assert_eq!(id, RecordId::from(7));
        assert!(id.matches(&r, "id_producto"));
        assert!(!id.matches(&r, "id"));
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn missing_or_null_identifier_is_none() {
        let r = record(json!({"id": null, "nombre": "x"}));
        assert!(RecordId::of(&r, "id").is_none());
        assert!(RecordId::of(&r, "id_venta").is_none());
    }

    #[test]
    fn string_identifiers_render_without_quotes() {
        assert_eq!(RecordId::from("A-1").as_path_text(), "A-1");
    }

    #[test]
    fn record_keeps_key_order() {
        let r: EntityRecord =
            serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<&str> = r.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }
}
