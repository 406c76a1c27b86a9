//! Data model for tabular profiling.
//!
//! Rows arrive as [`Record`]s of tagged [`Scalar`] values, are aligned to a
//! column set as a [`Dataset`], and are summarized into a [`ProfileReport`].

pub mod dataset;
pub mod error;
pub mod profile;
pub mod record;
pub mod scalar;

pub use dataset::{ColumnPolicy, Dataset};
pub use error::{ModelError, Result};
pub use profile::{ColumnProfile, ColumnType, ProfileReport, Recommendations, ReportDocument};
pub use record::{Record, records_from_json};
pub use scalar::{Scalar, format_number};
