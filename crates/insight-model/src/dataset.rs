//! Rectangular datasets built from record sequences.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::record::Record;
use crate::scalar::Scalar;

/// How the column set is derived from a sequence of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnPolicy {
    /// Columns are the first record's keys; keys seen only later are ignored.
    #[default]
    FirstRow,
    /// Columns are every key seen, in order of first appearance.
    Union,
}

/// Records aligned to a fixed column set.
///
/// Every row has exactly one value per column; keys a record lacks are
/// stored as [`Scalar::Missing`].
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Scalar>>,
    ignored_keys: usize,
}

impl Dataset {
    /// Aligns `records` to a column set chosen by `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidInput`] when `records` is empty.
    pub fn from_records(records: &[Record], policy: ColumnPolicy) -> Result<Self> {
        let Some(first) = records.first() else {
            return Err(ModelError::invalid_input("dataset has no rows"));
        };

        let mut columns: Vec<String> = first.keys().map(str::to_string).collect();
        if policy == ColumnPolicy::Union {
            for record in &records[1..] {
                for key in record.keys() {
                    if !columns.iter().any(|column| column == key) {
                        columns.push(key.to_string());
                    }
                }
            }
        }

        let index: HashMap<&str, usize> = columns
            .iter()
            .enumerate()
            .map(|(position, name)| (name.as_str(), position))
            .collect();

        let mut ignored_keys = 0usize;
        let mut rows = Vec::with_capacity(records.len());
        for record in records {
            let mut row = vec![Scalar::Missing; columns.len()];
            for (key, value) in record.iter() {
                match index.get(key) {
                    Some(&position) => row[position] = value.clone(),
                    None => ignored_keys += 1,
                }
            }
            rows.push(row);
        }

        Ok(Self {
            columns,
            rows,
            ignored_keys,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Scalar>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn cell_count(&self) -> usize {
        self.row_count() * self.column_count()
    }

    /// Values of one column, top to bottom.
    pub fn column_values(&self, position: usize) -> impl Iterator<Item = &Scalar> {
        self.rows.iter().filter_map(move |row| row.get(position))
    }

    /// Number of record keys that fell outside the column set.
    pub fn ignored_key_count(&self) -> usize {
        self.ignored_keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn empty_input_is_rejected() {
        let result = Dataset::from_records(&[], ColumnPolicy::FirstRow);
        assert!(matches!(result, Err(ModelError::InvalidInput { .. })));
    }

    #[test]
    fn first_row_policy_ignores_late_keys() {
        let records = vec![
            record(&[("a", "1"), ("b", "2")]),
            record(&[("b", "3"), ("c", "4")]),
        ];
        let dataset = Dataset::from_records(&records, ColumnPolicy::FirstRow).unwrap();

        assert_eq!(dataset.columns(), ["a", "b"]);
        assert_eq!(dataset.rows()[1], vec![Scalar::Missing, Scalar::from("3")]);
        assert_eq!(dataset.ignored_key_count(), 1);
    }

    #[test]
    fn union_policy_appends_late_keys() {
        let records = vec![record(&[("a", "1")]), record(&[("c", "4"), ("a", "2")])];
        let dataset = Dataset::from_records(&records, ColumnPolicy::Union).unwrap();

        assert_eq!(dataset.columns(), ["a", "c"]);
        assert_eq!(dataset.rows()[0], vec![Scalar::from("1"), Scalar::Missing]);
        assert_eq!(dataset.rows()[1], vec![Scalar::from("2"), Scalar::from("4")]);
        assert_eq!(dataset.ignored_key_count(), 0);
        assert_eq!(dataset.cell_count(), 4);
    }

    #[test]
    fn first_row_without_keys_yields_zero_columns() {
        let records = vec![Record::new(), record(&[("a", "1")])];
        let dataset = Dataset::from_records(&records, ColumnPolicy::FirstRow).unwrap();

        assert_eq!(dataset.column_count(), 0);
        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.cell_count(), 0);
    }
}
