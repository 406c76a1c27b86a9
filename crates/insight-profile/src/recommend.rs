//! Recommendation generation from column profiles.

use insight_model::{ColumnProfile, ColumnType, Recommendations};

use crate::config::ProfileConfig;
use crate::quality::round_percent;
use crate::templates::{RecommendationTemplates, TemplateArgs, render};

/// Builds recommendations in a fixed order from profiles in column order.
pub fn recommend(
    columns: &[ColumnProfile],
    total_rows: usize,
    config: &ProfileConfig,
    templates: &RecommendationTemplates,
) -> Recommendations {
    Recommendations {
        preprocessing: preprocessing(columns, total_rows, config, templates),
        eda: exploratory(columns, config, templates),
        feature_engineering: feature_engineering(columns, templates),
    }
}

fn preprocessing(
    columns: &[ColumnProfile],
    total_rows: usize,
    config: &ProfileConfig,
    templates: &RecommendationTemplates,
) -> Vec<String> {
    columns
        .iter()
        .filter(|column| column.missing_count > 0)
        .map(|column| {
            let percent = round_percent(column.missing_count, total_rows);
            let template = if percent > config.drop_column_missing_percent {
                &templates.remove_column
            } else {
                &templates.impute
            };
            render(template, &TemplateArgs::column(&column.name).with_percent(percent))
        })
        .collect()
}

fn exploratory(
    columns: &[ColumnProfile],
    config: &ProfileConfig,
    templates: &RecommendationTemplates,
) -> Vec<String> {
    let mut eda = Vec::new();
    for column in columns {
        let args = TemplateArgs::column(&column.name);
        match column.column_type {
            ColumnType::Numeric => {
                eda.push(render(&templates.histogram, &args));
                eda.push(render(&templates.box_plot, &args));
            }
            ColumnType::Categorical => {
                eda.push(render(&templates.bar_chart, &args));
                let distinct = column.distinct_count();
                if distinct > config.high_cardinality_threshold {
                    eda.push(render(
                        &templates.high_cardinality,
                        &args.with_count(distinct),
                    ));
                }
            }
            ColumnType::Datetime | ColumnType::Empty => {}
        }
    }

    let mut numeric = columns_of(columns, ColumnType::Numeric);
    if let (Some(first), Some(second)) = (numeric.next(), numeric.next()) {
        eda.push(render(
            &templates.scatter,
            &TemplateArgs::column(first).with_other(second),
        ));
    }
    eda
}

fn feature_engineering(
    columns: &[ColumnProfile],
    templates: &RecommendationTemplates,
) -> Vec<String> {
    let mut features = Vec::new();
    if columns_of(columns, ColumnType::Numeric).next().is_some() {
        features.push(render(&templates.scaling, &TemplateArgs::default()));
    }
    if let Some(first) = columns_of(columns, ColumnType::Categorical).next() {
        features.push(render(&templates.encoding, &TemplateArgs::column(first)));
    }
    if let Some(first) = columns_of(columns, ColumnType::Datetime).next() {
        features.push(render(&templates.date_features, &TemplateArgs::column(first)));
    }
    features
}

fn columns_of(
    columns: &[ColumnProfile],
    column_type: ColumnType,
) -> impl Iterator<Item = &str> {
    columns
        .iter()
        .filter(move |column| column.column_type == column_type)
        .map(|column| column.name.as_str())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn column(name: &str, column_type: ColumnType, missing: usize) -> ColumnProfile {
        ColumnProfile {
            name: name.to_string(),
            column_type,
            missing_count: missing,
            present_count: 4 - missing,
            numeric_count: 0,
            date_like_count: 0,
            value_frequency: (column_type == ColumnType::Categorical).then(BTreeMap::new),
        }
    }

    fn defaults(columns: &[ColumnProfile]) -> Recommendations {
        recommend(
            columns,
            4,
            &ProfileConfig::default(),
            &RecommendationTemplates::default(),
        )
    }

    #[test]
    fn missing_share_picks_template() {
        let recs = defaults(&[
            column("a", ColumnType::Numeric, 2),
            column("b", ColumnType::Numeric, 3),
            column("c", ColumnType::Numeric, 0),
        ]);
        assert_eq!(recs.preprocessing.len(), 2);
        assert!(recs.preprocessing[0].starts_with("Impute missing values in 'a' (50%)"));
        assert!(recs.preprocessing[1].starts_with("High missing values in 'b' (75%)"));
    }

    #[test]
    fn scatter_names_first_two_numeric_columns() {
        let recs = defaults(&[
            column("n1", ColumnType::Numeric, 0),
            column("cat", ColumnType::Categorical, 0),
            column("n2", ColumnType::Numeric, 0),
            column("n3", ColumnType::Numeric, 0),
        ]);
        let scatter = recs.eda.last().unwrap();
        assert!(scatter.contains("'n1' and 'n2'"));
        assert_eq!(recs.eda.len(), 2 + 1 + 2 + 2 + 1);
    }

    #[test]
    fn high_cardinality_warning() {
        let mut wide = column("id", ColumnType::Categorical, 0);
        wide.value_frequency = Some((0..11).map(|i| (format!("v{i}"), 1)).collect());
        let recs = defaults(&[wide]);
        assert_eq!(
            recs.eda,
            vec![
                "Analyze category frequencies in 'id' with a bar chart.".to_string(),
                "'id' has high cardinality (11 values). Consider grouping rare categories."
                    .to_string(),
            ]
        );
    }

    #[test]
    fn feature_engineering_order() {
        let recs = defaults(&[
            column("when", ColumnType::Datetime, 0),
            column("kind", ColumnType::Categorical, 0),
            column("blank", ColumnType::Empty, 4),
        ]);
        assert_eq!(recs.feature_engineering.len(), 2);
        assert!(recs.feature_engineering[0].contains("'kind'"));
        assert!(recs.feature_engineering[1].contains("'when'"));
    }

    #[test]
    fn nothing_to_say_about_empty_columns() {
        let recs = defaults(&[column("blank", ColumnType::Empty, 0)]);
        assert!(recs.is_empty());
    }
}
