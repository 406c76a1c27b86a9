//! Recommendation text templates.
//!
//! Templates are plain strings with `{column}`, `{percent}`, `{count}` and
//! `{other}` placeholders. Placeholders without a value, and unknown
//! placeholders, are left as written.

use serde::{Deserialize, Serialize};

/// Text for every recommendation the profiler can emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecommendationTemplates {
    /// Missing share above the removal threshold.
    pub remove_column: String,
    /// Missing share at or below the removal threshold.
    pub impute: String,
    pub histogram: String,
    pub box_plot: String,
    pub bar_chart: String,
    /// Categorical column with many distinct values.
    pub high_cardinality: String,
    /// First two numeric columns.
    pub scatter: String,
    pub scaling: String,
    pub encoding: String,
    pub date_features: String,
}

impl Default for RecommendationTemplates {
    fn default() -> Self {
        Self {
            remove_column: "High missing values in '{column}' ({percent}%). \
                            Consider removing this column."
                .to_string(),
            impute: "Impute missing values in '{column}' ({percent}%) using mean, \
                     median, or a model-based approach."
                .to_string(),
            histogram: "Visualize the distribution of '{column}' with a histogram \
                        to check for skewness."
                .to_string(),
            box_plot: "Use a box plot for '{column}' to identify potential outliers.".to_string(),
            bar_chart: "Analyze category frequencies in '{column}' with a bar chart.".to_string(),
            high_cardinality: "'{column}' has high cardinality ({count} values). \
                               Consider grouping rare categories."
                .to_string(),
            scatter: "Explore relationships between numeric features like '{column}' \
                      and '{other}' using a scatter plot."
                .to_string(),
            scaling: "Apply scaling (StandardScaler or MinMaxScaler) to numeric columns \
                      to normalize their ranges."
                .to_string(),
            encoding: "Encode categorical features like '{column}' using one-hot or \
                       label encoding."
                .to_string(),
            date_features: "Extract new features (e.g., year, month, day of week) \
                            from '{column}'."
                .to_string(),
        }
    }
}

/// Values substituted into a template.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateArgs<'a> {
    pub column: Option<&'a str>,
    pub percent: Option<u32>,
    pub count: Option<usize>,
    pub other: Option<&'a str>,
}

impl<'a> TemplateArgs<'a> {
    pub fn column(column: &'a str) -> Self {
        Self {
            column: Some(column),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_percent(mut self, percent: u32) -> Self {
        self.percent = Some(percent);
        self
    }

    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    #[must_use]
    pub fn with_other(mut self, other: &'a str) -> Self {
        self.other = Some(other);
        self
    }

    fn lookup(&self, name: &str) -> Option<String> {
        match name {
            "column" => self.column.map(str::to_string),
            "percent" => self.percent.map(|value| value.to_string()),
            "count" => self.count.map(|value| value.to_string()),
            "other" => self.other.map(str::to_string),
            _ => None,
        }
    }
}

/// Fills the placeholders of `template` from `args`.
pub fn render(template: &str, args: &TemplateArgs<'_>) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let Some(end) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };
        let name = &tail[1..end];
        if name.contains('{') {
            out.push('{');
            rest = &tail[1..];
            continue;
        }
        match args.lookup(name) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&tail[..=end]),
        }
        rest = &tail[end + 1..];
    }
    out.push_str(rest);
    out
}
