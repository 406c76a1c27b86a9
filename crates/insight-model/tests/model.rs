use std::collections::BTreeMap;

use insight_model::{
    ColumnProfile, ColumnType, ProfileReport, Recommendations, ReportDocument,
};

fn sample_report() -> ProfileReport {
    let mut frequency = BTreeMap::new();
    frequency.insert("A".to_string(), 2);
    frequency.insert("B".to_string(), 1);

    ProfileReport {
        total_records: 3,
        columns: vec![
            ColumnProfile {
                name: "x".to_string(),
                column_type: ColumnType::Numeric,
                missing_count: 1,
                present_count: 2,
                numeric_count: 2,
                date_like_count: 0,
                value_frequency: None,
            },
            ColumnProfile {
                name: "y".to_string(),
                column_type: ColumnType::Categorical,
                missing_count: 0,
                present_count: 3,
                numeric_count: 0,
                date_like_count: 0,
                value_frequency: Some(frequency),
            },
        ],
        data_quality: 83,
        recommendations: Recommendations {
            preprocessing: vec!["impute x".to_string()],
            eda: vec![],
            feature_engineering: vec!["encode y".to_string()],
        },
    }
}

#[test]
fn report_serializes_to_wire_shape() {
    let value = serde_json::to_value(sample_report()).expect("serialize report");

    assert_eq!(value["totalRecords"], 3);
    assert_eq!(value["totalColumns"], 2);
    assert_eq!(value["columns"], serde_json::json!(["x", "y"]));
    assert_eq!(value["columnTypes"]["x"], "numeric");
    assert_eq!(value["columnTypes"]["y"], "categorical");
    assert_eq!(value["classBreakdown"], serde_json::json!({"y": {"A": 2, "B": 1}}));
    assert_eq!(value["missingValues"], serde_json::json!({"x": 1, "y": 0}));
    assert_eq!(value["dataQuality"], 83);
    assert_eq!(
        value["recommendations"]["featureEngineering"],
        serde_json::json!(["encode y"])
    );
}

#[test]
fn document_round_trips_through_json() {
    let document = sample_report().to_document();
    let json = serde_json::to_string(&document).expect("serialize document");
    let parsed: ReportDocument = serde_json::from_str(&json).expect("deserialize document");
    assert_eq!(parsed, document);
}

#[test]
fn report_accessors() {
    let report = sample_report();

    assert_eq!(report.total_columns(), 2);
    assert_eq!(report.column_names(), vec!["x", "y"]);
    assert_eq!(report.total_missing() + report.total_present(), 6);
    assert_eq!(report.columns_of_type(ColumnType::Categorical).count(), 1);

    let y = report.column("y").expect("y profile");
    assert_eq!(y.distinct_count(), 2);
    assert_eq!(y.top_values(1), vec![("A", 2)]);
    assert!(report.column("z").is_none());
    assert_eq!(report.recommendations.len(), 2);
}
