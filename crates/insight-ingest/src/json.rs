//! JSON dataset reading and writing.

use std::path::Path;

use insight_model::Record;
use serde_json::Value;
use tracing::warn;

use crate::error::{IngestError, Result};

/// Reads a JSON file holding an array of row objects.
///
/// Elements that are not objects become empty records, so they still count
/// toward the row total.
pub fn read_json_records(path: &Path) -> Result<Vec<Record>> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::read(path, e))?;
    parse_json_records(&text, path)
}

/// Parses JSON text; `path` is only used for error messages.
pub fn parse_json_records(text: &str, path: &Path) -> Result<Vec<Record>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let value: Value = serde_json::from_str(text).map_err(|source| IngestError::JsonParse {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Array(elements) = value else {
        return Err(IngestError::NotAnArray {
            path: path.to_path_buf(),
            found: json_kind(&value),
        });
    };

    let mut skipped = 0usize;
    let records: Vec<Record> = elements
        .iter()
        .map(|element| match element {
            Value::Object(object) => Record::from_json_object(object),
            _ => {
                skipped += 1;
                Record::new()
            }
        })
        .collect();

    if skipped > 0 {
        warn!(
            path = %path.display(),
            skipped,
            "non-object rows were read as empty records"
        );
    }

    Ok(records)
}

/// Writes records as a pretty-printed JSON array.
pub fn write_json_records(path: &Path, records: &[Record]) -> Result<()> {
    let json = serde_json::to_string_pretty(records).map_err(|source| IngestError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| IngestError::Write {
        path: path.to_path_buf(),
        source,
    })
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
    use insight_model::Scalar;

    fn parse(text: &str) -> Result<Vec<Record>> {
        parse_json_records(text, Path::new("rows.json"))
    }

    #[test]
    fn reads_rows_in_key_order() {
        let records = parse(r#"[{"b": 1, "a": "x"}, {"b": null, "a": true}]"#).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(records[0].get("b"), Some(&Scalar::Number(1.0)));
        assert_eq!(records[1].get("b"), Some(&Scalar::Missing));
        assert_eq!(records[1].get("a"), Some(&Scalar::Bool(true)));
    }

    #[test]
    fn non_object_rows_become_empty() {
        let records = parse(r#"[{"a": 1}, 5, "text"]"#).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records[1].is_empty());
        assert!(records[2].is_empty());
    }

    #[test]
    fn rejects_non_arrays() {
        assert!(matches!(
            parse(r#"{"rows": []}"#),
            Err(IngestError::NotAnArray { found: "an object", .. })
        ));
        assert!(matches!(
            parse("null"),
            Err(IngestError::NotAnArray { found: "null", .. })
        ));
        assert!(matches!(parse("[1,"), Err(IngestError::JsonParse { .. })));
    }

    #[test]
    fn strips_utf8_bom() {
        let records = parse("\u{feff}[{\"a\": 1}]").unwrap();
        assert_eq!(records.len(), 1);
    }
}
