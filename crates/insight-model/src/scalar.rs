//! Tagged cell values.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

/// A single cell of a record.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Scalar {
    /// Null or absent value.
    #[default]
    Missing,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Scalar {
    /// Returns true unless the value is missing or an empty string.
    ///
    /// Whitespace-only text counts as present.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Missing => false,
            Self::Text(text) => !text.is_empty(),
            Self::Number(_) | Self::Bool(_) => true,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Converts a JSON value into a scalar.
    ///
    /// Arrays and objects are kept as their compact JSON text.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Missing,
            Value::Bool(flag) => Self::Bool(*flag),
            Value::Number(number) => number.as_f64().map_or(Self::Missing, Self::Number),
            Value::String(text) => Self::Text(text.clone()),
            Value::Array(_) | Value::Object(_) => Self::Text(value.to_string()),
        }
    }
}

/// Formats a number the way it is keyed in frequency tables.
///
/// Integral values print without a fractional part.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => Ok(()),
            Self::Number(value) => f.write_str(&format_number(*value)),
            Self::Text(text) => f.write_str(text),
            Self::Bool(flag) => write!(f, "{flag}"),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Missing => serializer.serialize_none(),
            Self::Number(value) => {
                if value.fract() == 0.0 && value.abs() < 1e15 {
                    serializer.serialize_i64(*value as i64)
                } else {
                    serializer.serialize_f64(*value)
                }
            }
            Self::Text(text) => serializer.serialize_str(text),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn presence_rules() {
        assert!(!Scalar::Missing.is_present());
        assert!(!Scalar::from("").is_present());
        assert!(Scalar::from(" ").is_present());
        assert!(Scalar::from(0.0).is_present());
        assert!(Scalar::from(false).is_present());
    }

    #[test]
    fn numbers_display_like_keys() {
        assert_eq!(Scalar::from(3.0).to_string(), "3");
        assert_eq!(Scalar::from(-0.0).to_string(), "0");
        assert_eq!(Scalar::from(1.5).to_string(), "1.5");
        assert_eq!(Scalar::from(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Scalar::from(true).to_string(), "true");
        assert_eq!(Scalar::Missing.to_string(), "");
    }

    #[test]
    fn from_json_keeps_type_tags() {
        assert_eq!(Scalar::from_json(&json!(null)), Scalar::Missing);
        assert_eq!(Scalar::from_json(&json!(4)), Scalar::Number(4.0));
        assert_eq!(Scalar::from_json(&json!("x")), Scalar::from("x"));
        assert_eq!(Scalar::from_json(&json!(true)), Scalar::Bool(true));
        assert_eq!(Scalar::from_json(&json!([1, 2])), Scalar::from("[1,2]"));
    }

    #[test]
    fn serializes_untagged() {
        let values = vec![
            Scalar::Missing,
            Scalar::from(2.0),
            Scalar::from(2.5),
            Scalar::from("a"),
            Scalar::from(false),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[null,2,2.5,"a",false]"#);
    }

    #[test]
    fn option_converts_to_missing() {
        assert_eq!(Scalar::from(None::<&str>), Scalar::Missing);
        assert_eq!(Scalar::from(Some("4.5")), Scalar::from("4.5"));
    }
}
