//! Profile report types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Inferred column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Numeric,
    Categorical,
    Datetime,
    /// No present values at all.
    Empty,
}

impl ColumnType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
            Self::Datetime => "datetime",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-column profiling result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    pub column_type: ColumnType,
    pub missing_count: usize,
    pub present_count: usize,
    /// Present values that parse as numbers.
    pub numeric_count: usize,
    /// Present values that parse as calendar dates.
    pub date_like_count: usize,
    /// Occurrences per distinct present value; only for categorical columns.
    pub value_frequency: Option<BTreeMap<String, usize>>,
}

impl ColumnProfile {
    /// Number of distinct values recorded in the frequency table.
    pub fn distinct_count(&self) -> usize {
        self.value_frequency.as_ref().map_or(0, BTreeMap::len)
    }

    /// Frequency entries ordered by descending count, then value.
    pub fn top_values(&self, limit: usize) -> Vec<(&str, usize)> {
        let Some(frequency) = &self.value_frequency else {
            return Vec::new();
        };
        let mut entries: Vec<(&str, usize)> = frequency
            .iter()
            .map(|(value, count)| (value.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(limit);
        entries
    }
}

/// Recommendation strings grouped by stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub preprocessing: Vec<String>,
    pub eda: Vec<String>,
    pub feature_engineering: Vec<String>,
}

impl Recommendations {
    pub fn len(&self) -> usize {
        self.preprocessing.len() + self.eda.len() + self.feature_engineering.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sections with their display titles, in report order.
    pub fn sections(&self) -> [(&'static str, &[String]); 3] {
        [
            ("Preprocessing", &self.preprocessing),
            ("Exploratory analysis", &self.eda),
            ("Feature engineering", &self.feature_engineering),
        ]
    }
}

/// Complete profile of a dataset.
///
/// Serializes to the flat [`ReportDocument`] shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "ReportDocument")]
pub struct ProfileReport {
    pub total_records: usize,
    /// Column profiles in column order.
    pub columns: Vec<ColumnProfile>,
    /// Percentage of non-missing cells, 0 to 100.
    pub data_quality: u8,
    pub recommendations: Recommendations,
}

impl ProfileReport {
    pub fn total_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }

    pub fn columns_of_type(&self, column_type: ColumnType) -> impl Iterator<Item = &ColumnProfile> {
        self.columns
            .iter()
            .filter(move |column| column.column_type == column_type)
    }

    pub fn total_missing(&self) -> usize {
        self.columns.iter().map(|column| column.missing_count).sum()
    }

    pub fn total_present(&self) -> usize {
        self.columns.iter().map(|column| column.present_count).sum()
    }

    /// Builds the flat document consumed by presentation layers.
    pub fn to_document(&self) -> ReportDocument {
        ReportDocument::from(self.clone())
    }
}

/// Wire shape of a profile report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    pub total_records: usize,
    pub total_columns: usize,
    pub columns: Vec<String>,
    pub column_types: BTreeMap<String, ColumnType>,
    /// Frequency tables for categorical columns only.
    pub class_breakdown: BTreeMap<String, BTreeMap<String, usize>>,
    pub missing_values: BTreeMap<String, usize>,
    pub data_quality: u8,
    pub recommendations: Recommendations,
}

impl From<ProfileReport> for ReportDocument {
    fn from(report: ProfileReport) -> Self {
        let total_columns = report.columns.len();
        let mut columns = Vec::with_capacity(total_columns);
        let mut column_types = BTreeMap::new();
        let mut class_breakdown = BTreeMap::new();
        let mut missing_values = BTreeMap::new();

        for profile in report.columns {
            column_types.insert(profile.name.clone(), profile.column_type);
            missing_values.insert(profile.name.clone(), profile.missing_count);
            if let Some(frequency) = profile.value_frequency {
                class_breakdown.insert(profile.name.clone(), frequency);
            }
            columns.push(profile.name);
        }

        Self {
            total_records: report.total_records,
            total_columns,
            columns,
            column_types,
            class_breakdown,
            missing_values,
            data_quality: report.data_quality,
            recommendations: report.recommendations,
        }
    }
}
