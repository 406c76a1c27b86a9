//! The dataset profiler.

use std::collections::BTreeMap;

use insight_model::{
    ColumnProfile, ColumnType, Dataset, ProfileReport, Record, records_from_json,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::ProfileConfig;
use crate::error::Result;
use crate::infer::ValueCounts;
use crate::quality::quality_score;
use crate::recommend::recommend;
use crate::templates::RecommendationTemplates;

/// Profiles datasets with a fixed configuration and template set.
#[derive(Debug, Clone, Default)]
pub struct Profiler {
    config: ProfileConfig,
    templates: RecommendationTemplates,
}

impl Profiler {
    pub fn new(config: ProfileConfig, templates: RecommendationTemplates) -> Self {
        Self { config, templates }
    }

    #[must_use]
    pub fn with_config(mut self, config: ProfileConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_templates(mut self, templates: RecommendationTemplates) -> Self {
        self.templates = templates;
        self
    }

    /// Profiles a sequence of records.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidInput`](crate::ProfileError::InvalidInput)
    /// when `records` is empty.
    pub fn profile(&self, records: &[Record]) -> Result<ProfileReport> {
        let dataset = Dataset::from_records(records, self.config.column_policy)?;
        if dataset.ignored_key_count() > 0 {
            debug!(
                ignored = dataset.ignored_key_count(),
                policy = ?self.config.column_policy,
                "record keys outside the column set were ignored"
            );
        }
        Ok(self.profile_dataset(&dataset))
    }

    /// Profiles an untyped JSON dataset (an array of row objects).
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidInput`](crate::ProfileError::InvalidInput)
    /// when `value` is null, not an array, or an empty array.
    pub fn profile_json(&self, value: &Value) -> Result<ProfileReport> {
        let records = records_from_json(value)?;
        self.profile(&records)
    }

    /// Profiles an aligned dataset.
    pub fn profile_dataset(&self, dataset: &Dataset) -> ProfileReport {
        let total_records = dataset.row_count();
        let columns: Vec<ColumnProfile> = (0..dataset.column_count())
            .map(|position| self.profile_column(dataset, position))
            .collect();

        let total_missing: usize = columns.iter().map(|column| column.missing_count).sum();
        let data_quality = quality_score(dataset.cell_count(), total_missing);
        let recommendations = recommend(&columns, total_records, &self.config, &self.templates);

        info!(
            records = total_records,
            columns = columns.len(),
            missing = total_missing,
            data_quality,
            recommendations = recommendations.len(),
            "profiled dataset"
        );

        ProfileReport {
            total_records,
            columns,
            data_quality,
            recommendations,
        }
    }

    fn profile_column(&self, dataset: &Dataset, position: usize) -> ColumnProfile {
        let name = dataset.columns()[position].clone();
        let counts =
            ValueCounts::from_values(dataset.column_values(position), self.config.min_date_length);
        let column_type = counts.column_type(self.config.type_ratio_threshold);

        let value_frequency = (column_type == ColumnType::Categorical).then(|| {
            let mut frequency: BTreeMap<String, usize> = BTreeMap::new();
            for value in dataset.column_values(position).filter(|value| value.is_present()) {
                *frequency.entry(value.to_string()).or_insert(0) += 1;
            }
            frequency
        });

        debug!(
            column = %name,
            column_type = %column_type,
            present = counts.present,
            numeric = counts.numeric,
            date_like = counts.date_like,
            "inferred column type"
        );

        ColumnProfile {
            name,
            column_type,
            missing_count: counts.missing(),
            present_count: counts.present,
            numeric_count: counts.numeric,
            date_like_count: counts.date_like,
            value_frequency,
        }
    }
}

/// Profiles `records` with the default configuration and templates.
///
/// # Errors
///
/// Returns [`ProfileError::InvalidInput`](crate::ProfileError::InvalidInput)
/// when `records` is empty.
pub fn profile(records: &[Record]) -> Result<ProfileReport> {
    Profiler::default().profile(records)
}

/// Profiles an untyped JSON dataset with the default configuration.
///
/// # Errors
///
/// Returns [`ProfileError::InvalidInput`](crate::ProfileError::InvalidInput)
/// when `value` is null, not an array, or an empty array.
pub fn profile_json(value: &Value) -> Result<ProfileReport> {
    Profiler::default().profile_json(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProfileError;
    use insight_model::{ColumnPolicy, Scalar};
    use serde_json::json;

    fn rows(pairs: &[&[(&str, &str)]]) -> Vec<Record> {
        pairs
            .iter()
            .map(|row| row.iter().map(|(k, v)| (*k, *v)).collect())
            .collect()
    }

    #[test]
    fn reference_example() {
        let records = rows(&[
            &[("x", "1"), ("y", "A")],
            &[("x", "2"), ("y", "B")],
            &[("x", ""), ("y", "A")],
        ]);
        let report = profile(&records).unwrap();

        let x = report.column("x").unwrap();
        assert_eq!(x.missing_count, 1);
        assert_eq!(x.column_type, ColumnType::Numeric);
        assert!(x.value_frequency.is_none());

        let y = report.column("y").unwrap();
        assert_eq!(y.column_type, ColumnType::Categorical);
        let expected: BTreeMap<String, usize> =
            [("A".to_string(), 2), ("B".to_string(), 1)].into_iter().collect();
        assert_eq!(y.value_frequency.as_ref(), Some(&expected));

        assert_eq!(report.data_quality, 83);
    }

    #[test]
    fn empty_input_fails() {
        assert!(matches!(profile(&[]), Err(ProfileError::InvalidInput { .. })));
        assert!(matches!(
            profile_json(&json!(null)),
            Err(ProfileError::InvalidInput { .. })
        ));
        assert!(matches!(
            profile_json(&json!([])),
            Err(ProfileError::InvalidInput { .. })
        ));
    }

    #[test]
    fn frequency_keys_use_string_form() {
        let records = vec![
            Record::from_iter([("n", Scalar::from(1.0))]),
            Record::from_iter([("n", Scalar::from("1"))]),
            Record::from_iter([("n", Scalar::from(true))]),
            Record::from_iter([("n", Scalar::from("z"))]),
        ];
        let report = profile(&records).unwrap();
        let n = report.column("n").unwrap();

        // 2 of 4 numeric keeps the column categorical.
        assert_eq!(n.column_type, ColumnType::Categorical);
        let frequency = n.value_frequency.as_ref().unwrap();
        assert_eq!(frequency.get("1"), Some(&2));
        assert_eq!(frequency.get("true"), Some(&1));
        assert_eq!(frequency.get("z"), Some(&1));
    }

    #[test]
    fn union_policy_counts_late_columns() {
        let records = rows(&[&[("a", "1")], &[("a", "2"), ("b", "x")]]);
        let profiler = Profiler::default()
            .with_config(ProfileConfig::default().with_column_policy(ColumnPolicy::Union));
        let report = profiler.profile(&records).unwrap();

        assert_eq!(report.column_names(), vec!["a", "b"]);
        assert_eq!(report.column("b").unwrap().missing_count, 1);
        assert_eq!(report.data_quality, 75);
    }

    #[test]
    fn zero_column_dataset_scores_full_quality() {
        let records = vec![Record::new(), Record::new()];
        let report = profile(&records).unwrap();

        assert_eq!(report.total_records, 2);
        assert_eq!(report.total_columns(), 0);
        assert_eq!(report.data_quality, 100);
        assert!(report.recommendations.is_empty());
    }
}
