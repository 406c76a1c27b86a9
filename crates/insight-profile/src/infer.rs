//! Per-value classification and column type inference.

use insight_model::{ColumnType, Scalar};

use crate::dates::parse_date;

/// Parses text as a number, rejecting NaN.
///
/// Surrounding whitespace is ignored; the remainder must parse fully. The only
/// spelled-out infinity is `Infinity`, optionally signed. Overflowing literals
/// such as `1e400` still read as infinite numbers.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) && unsigned != "Infinity" {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| !value.is_nan())
}

/// Returns true if a present value reads as a number.
pub fn is_numeric(value: &Scalar) -> bool {
    match value {
        Scalar::Number(number) => !number.is_nan(),
        Scalar::Text(text) => parse_number(text).is_some(),
        Scalar::Missing | Scalar::Bool(_) => false,
    }
}

/// Returns true if a value is text longer than `min_length` characters that
/// parses as a calendar date.
///
/// The length guard keeps short numerals from reading as dates.
pub fn is_date_like(value: &Scalar, min_length: usize) -> bool {
    match value {
        Scalar::Text(text) => text.chars().count() > min_length && parse_date(text).is_some(),
        _ => false,
    }
}

/// Running tallies for one column.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ValueCounts {
    pub total: usize,
    pub present: usize,
    pub numeric: usize,
    pub date_like: usize,
}

impl ValueCounts {
    /// Tallies every value of a column.
    pub fn from_values<'a>(
        values: impl IntoIterator<Item = &'a Scalar>,
        min_date_length: usize,
    ) -> Self {
        let mut counts = Self::default();
        for value in values {
            counts.observe(value, min_date_length);
        }
        counts
    }

    pub fn observe(&mut self, value: &Scalar, min_date_length: usize) {
        self.total += 1;
        if !value.is_present() {
            return;
        }
        self.present += 1;
        if is_numeric(value) {
            self.numeric += 1;
        }
        if is_date_like(value, min_date_length) {
            self.date_like += 1;
        }
    }

    pub fn missing(self) -> usize {
        self.total - self.present
    }

    fn ratio(self, count: usize) -> f64 {
        if self.present == 0 {
            0.0
        } else {
            count as f64 / self.present as f64
        }
    }

    pub fn numeric_ratio(self) -> f64 {
        self.ratio(self.numeric)
    }

    pub fn date_like_ratio(self) -> f64 {
        self.ratio(self.date_like)
    }

    /// Decides the column type. Dates are checked before numbers.
    pub fn column_type(self, threshold: f64) -> ColumnType {
        if self.present == 0 {
            ColumnType::Empty
        } else if self.date_like_ratio() > threshold {
            ColumnType::Datetime
        } else if self.numeric_ratio() > threshold {
            ColumnType::Numeric
        } else {
            ColumnType::Categorical
        }
    }
}
