//! Spreadsheet reading (xls, xlsx, xlsm, xlsb, ods).

use std::collections::HashSet;
use std::path::Path;

use calamine::{Data, DataType, Reader, open_workbook_auto};
use insight_model::{Record, Scalar};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Placeholder name for header cells with no text.
const EMPTY_HEADER: &str = "__EMPTY";

/// Reads the first worksheet of a workbook into records.
///
/// The first non-empty row is the header. Fully empty rows are skipped and
/// empty cells are kept as missing values.
pub fn read_excel_records(path: &Path) -> Result<Vec<Record>> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Excel {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(|e| IngestError::Excel {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let records = records_from_rows(range.rows());
    debug!(
        path = %path.display(),
        rows = records.len(),
        "read first worksheet"
    );
    Ok(records)
}

pub(crate) fn records_from_rows<'a>(rows: impl Iterator<Item = &'a [Data]>) -> Vec<Record> {
    let mut rows = rows.filter(|row| !is_blank_row(row));
    let Some(header_row) = rows.next() else {
        return Vec::new();
    };
    let headers = header_names(header_row);

    rows.map(|row| {
        let mut record = Record::with_capacity(headers.len());
        for (index, header) in headers.iter().enumerate() {
            let value = row.get(index).map_or(Scalar::Missing, cell_scalar);
            record.insert(header.as_str(), value);
        }
        record
    })
    .collect()
}

fn is_blank_row(row: &[Data]) -> bool {
    row.iter().all(|cell| !cell_scalar(cell).is_present())
}

/// Unique header names: blanks become `__EMPTY`, repeats get `_1`, `_2`, ...
fn header_names(row: &[Data]) -> Vec<String> {
    let mut seen = HashSet::new();
    row.iter()
        .map(|cell| {
            let text = cell.to_string();
            let base = match text.trim() {
                "" => EMPTY_HEADER.to_string(),
                trimmed => trimmed.to_string(),
            };
            unique_name(base, &mut seen)
        })
        .collect()
}

fn unique_name(base: String, seen: &mut HashSet<String>) -> String {
    if seen.insert(base.clone()) {
        return base;
    }
    let mut suffix = 1usize;
    loop {
        let candidate = format!("{base}_{suffix}");
        if seen.insert(candidate.clone()) {
            return candidate;
        }
        suffix += 1;
    }
}

fn cell_scalar(cell: &Data) -> Scalar {
    match cell {
        Data::Empty => Scalar::Missing,
        Data::String(text) => Scalar::Text(text.clone()),
        Data::Float(value) => Scalar::Number(*value),
        Data::Int(value) => Scalar::Number(*value as f64),
        Data::Bool(value) => Scalar::Bool(*value),
        Data::DateTime(_) => match cell.as_datetime() {
            Some(datetime) => Scalar::Text(datetime.to_string()),
            None => Scalar::Text(cell.to_string()),
        },
        other => Scalar::Text(other.to_string()),
    }
}
