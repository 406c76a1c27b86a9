//! Format dispatch for dataset files.

use std::path::Path;

use insight_model::Record;
use tracing::info;

use crate::delimited::{CsvOptions, read_csv_records};
use crate::error::Result;
use crate::excel::read_excel_records;
use crate::file::{FileKind, MAX_INPUT_FILE_SIZE, check_file_size_with_limit, validate_encoding};
use crate::json::read_json_records;

/// Options for [`load_records`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub csv: CsvOptions,
    pub max_file_size: u64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            csv: CsvOptions::default(),
            max_file_size: MAX_INPUT_FILE_SIZE,
        }
    }
}

/// Records read from a file, with the detected format.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedData {
    pub kind: FileKind,
    pub records: Vec<Record>,
}

/// Loads a JSON, CSV, or Excel file, chosen by extension.
///
/// # Errors
///
/// Fails on unknown extensions, oversized or unreadable files, UTF-16 text,
/// and malformed content.
pub fn load_records(path: &Path, options: &LoadOptions) -> Result<LoadedData> {
    let kind = FileKind::from_path(path)?;
    check_file_size_with_limit(path, options.max_file_size)?;
    if kind.is_text() {
        validate_encoding(path)?;
    }

    let records = match kind {
        FileKind::Json => read_json_records(path)?,
        FileKind::Csv => read_csv_records(path, &options.csv)?,
        FileKind::Excel => read_excel_records(path)?,
    };

    info!(
        path = %path.display(),
        kind = %kind,
        records = records.len(),
        "loaded dataset"
    );
    Ok(LoadedData { kind, records })
}
