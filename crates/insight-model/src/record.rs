//! Ordered row records.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{ModelError, Result};
use crate::scalar::Scalar;

/// A row: column name to value, in insertion order.
///
/// Inserting an existing key replaces its value without moving it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    cells: Vec<(String, Scalar)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
        }
    }

    /// Sets `key` to `value`, keeping the key's original position if present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Scalar>) {
        let key = key.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(name, _)| *name == key) {
            Some((_, slot)) => *slot = value,
            None => self.cells.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.cells
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.cells.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Builds a record from a JSON object, preserving key order.
    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        let mut record = Self::with_capacity(object.len());
        for (key, value) in object {
            record.insert(key.clone(), Scalar::from_json(value));
        }
        record
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Scalar>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (key, value) in &self.cells {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Converts an untyped JSON dataset into records.
///
/// The value must be a non-null array. Elements that are not objects become
/// empty records, so every one of their cells counts as missing.
pub fn records_from_json(value: &Value) -> Result<Vec<Record>> {
    match value {
        Value::Array(items) => Ok(items
            .iter()
            .map(|item| match item {
                Value::Object(object) => Record::from_json_object(object),
                _ => Record::new(),
            })
            .collect()),
        Value::Null => Err(ModelError::invalid_input("dataset is null")),
        other => Err(ModelError::invalid_input(format!(
            "expected an array of rows, found {}",
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_replaces_in_place() {
        let mut record = Record::new();
        record.insert("a", "1");
        record.insert("b", "2");
        record.insert("a", "3");

        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(record.get("a"), Some(&Scalar::from("3")));
    }

    #[test]
    fn json_object_key_order_is_preserved() {
        let value = json!({"zeta": 1, "alpha": "x", "mid": null});
        let record = Record::from_json_object(value.as_object().unwrap());

        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(record.get("mid"), Some(&Scalar::Missing));
    }

    #[test]
    fn records_from_json_rejects_non_arrays() {
        assert!(matches!(
            records_from_json(&json!(null)),
            Err(ModelError::InvalidInput { .. })
        ));
        assert!(matches!(
            records_from_json(&json!({"a": 1})),
            Err(ModelError::InvalidInput { .. })
        ));
    }

    #[test]
    fn non_object_elements_become_empty_records() {
        let records = records_from_json(&json!([{"a": 1}, 5, "x"])).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records[1].is_empty());
        assert!(records[2].is_empty());
    }

    #[test]
    fn serializes_as_ordered_map() {
        let record: Record = [("b", Scalar::from(1.0)), ("a", Scalar::Missing)]
            .into_iter()
            .collect();
        assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"b":1,"a":null}"#);
    }
}
