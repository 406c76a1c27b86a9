//! Delimited text (CSV) reading.

use std::io::Read;
use std::path::Path;

use insight_model::{Record, Scalar};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{IngestError, Result};

/// CSV reading options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CsvOptions {
    /// Field separator; must be ASCII.
    pub delimiter: char,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl CsvOptions {
    fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(IngestError::InvalidDelimiter {
                delimiter: self.delimiter,
            })
        }
    }
}

/// Reads a CSV file into records.
///
/// The first non-blank line is the header. Every value is kept as trimmed
/// text; short rows are padded with empty strings and surplus fields are
/// dropped. Fewer than two non-blank lines yields no records.
pub fn read_csv_records(path: &Path, options: &CsvOptions) -> Result<Vec<Record>> {
    let delimiter = options.delimiter_byte()?;
    let file = std::fs::File::open(path).map_err(|e| IngestError::read(path, e))?;
    parse_csv_records(file, delimiter).map_err(|source| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn parse_csv_records<R: Read>(reader: R, delimiter: u8) -> csv::Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut lines: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result?;
        // A whitespace-only line parses as one blank field.
        if record.len() == 1 && normalize_cell(&record[0]).is_empty() {
            continue;
        }
        lines.push(record.iter().map(normalize_cell).collect());
    }

    let mut lines = lines.into_iter();
    let Some(headers) = lines.next() else {
        return Ok(Vec::new());
    };

    let records: Vec<Record> = lines
        .map(|values| {
            let mut record = Record::with_capacity(headers.len());
            for (index, header) in headers.iter().enumerate() {
                let value = values.get(index).cloned().unwrap_or_default();
                record.insert(header.as_str(), Scalar::Text(value));
            }
            record
        })
        .collect();

    debug!(
        columns = headers.len(),
        rows = records.len(),
        "parsed delimited text"
    );
    Ok(records)
}

fn normalize_cell(value: &str) -> String {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}').to_string()
}
