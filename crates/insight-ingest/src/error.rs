//! Error types for dataset ingestion.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while loading or writing datasets.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds maximum allowed size.
    #[error("file too large: {path} ({size} bytes, max {max_size} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Text file uses an unsupported encoding.
    #[error("unsupported encoding in {path}: {encoding} (only UTF-8 is supported)")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Extension is not one of the supported formats.
    #[error("unsupported file type '{extension}' for {path} (expected JSON, CSV, or Excel)")]
    UnsupportedFileType { path: PathBuf, extension: String },

    // === Parsing Errors ===
    /// Invalid JSON text.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON document is not an array of rows.
    #[error("expected an array of rows in {path}, found {found}")]
    NotAnArray { path: PathBuf, found: &'static str },

    /// Malformed CSV content.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// CSV delimiter is not a single ASCII character.
    #[error("invalid CSV delimiter {delimiter:?}: must be a single ASCII character")]
    InvalidDelimiter { delimiter: char },

    /// Workbook could not be opened or read.
    #[error("failed to read workbook {path}: {message}")]
    Excel { path: PathBuf, message: String },

    /// Workbook has no worksheets.
    #[error("no worksheet found in {path}")]
    NoWorksheet { path: PathBuf },

    /// Records could not be serialized.
    #[error("failed to serialize records for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl IngestError {
    /// Maps an open/read failure, distinguishing a missing file.
    pub(crate) fn read(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
