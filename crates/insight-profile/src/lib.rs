//! Tabular data profiling.
//!
//! Given rows of records, the profiler infers each column's type (numeric,
//! categorical, datetime, or empty), counts missing values, scores overall
//! data quality, tabulates categorical value frequencies, and renders
//! recommendation text from [`RecommendationTemplates`].
//!
//! # Example
//!
//! ```
//! use insight_model::Record;
//! use insight_profile::profile;
//!
//! let rows: Vec<Record> = vec![
//!     [("x", "1"), ("y", "A")].into_iter().collect(),
//!     [("x", "2"), ("y", "B")].into_iter().collect(),
//!     [("x", ""), ("y", "A")].into_iter().collect(),
//! ];
//! let report = profile(&rows).unwrap();
//! assert_eq!(report.data_quality, 83);
//! ```

mod config;
mod dates;
mod error;
mod infer;
mod profiler;
mod quality;
mod recommend;
mod templates;

pub use config::ProfileConfig;
pub use dates::parse_date;
pub use error::{ProfileError, Result};
pub use infer::{ValueCounts, is_date_like, is_numeric, parse_number};
pub use profiler::{Profiler, profile, profile_json};
pub use quality::{quality_score, round_percent};
pub use recommend::recommend;
pub use templates::{RecommendationTemplates, TemplateArgs, render};
