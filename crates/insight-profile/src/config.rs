//! Profiler thresholds.

use insight_model::ColumnPolicy;
use serde::{Deserialize, Serialize};

/// Tunable thresholds for type inference and recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileConfig {
    /// Share of present values that must be date-like (or numeric) for a
    /// column to be typed datetime (or numeric). Compared strictly.
    pub type_ratio_threshold: f64,
    /// Text must be longer than this many characters to count as a date.
    pub min_date_length: usize,
    /// Categorical columns with more distinct values get a cardinality warning.
    pub high_cardinality_threshold: usize,
    /// Missing percentage above which removing the column is suggested.
    pub drop_column_missing_percent: u32,
    pub column_policy: ColumnPolicy,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            type_ratio_threshold: 0.8,
            min_date_length: 6,
            high_cardinality_threshold: 10,
            drop_column_missing_percent: 50,
            column_policy: ColumnPolicy::FirstRow,
        }
    }
}

impl ProfileConfig {
    #[must_use]
    pub fn with_column_policy(mut self, policy: ColumnPolicy) -> Self {
        self.column_policy = policy;
        self
    }
}
