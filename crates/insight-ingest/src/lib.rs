//! Dataset ingestion.
//!
//! Reads JSON arrays of row objects, delimited text, and spreadsheets into
//! [`Record`](insight_model::Record)s, and generates synthetic order data
//! for demos.

mod delimited;
mod error;
mod excel;
mod file;
mod json;
mod loader;
mod sample;

// === Error Types ===
pub use error::{IngestError, Result};

// === Readers ===
pub use delimited::{CsvOptions, read_csv_records};
pub use excel::read_excel_records;
pub use json::{parse_json_records, read_json_records, write_json_records};

// === File Checks ===
pub use file::{
    FileKind, MAX_INPUT_FILE_SIZE, check_file_size, check_file_size_with_limit, validate_encoding,
};

// === Loading ===
pub use loader::{LoadOptions, LoadedData, load_records};

// === Sample Data ===
pub use sample::{DEFAULT_SAMPLE_ROWS, SampleOptions, generate_sample_records};
