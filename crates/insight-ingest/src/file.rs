//! File type detection and pre-load checks.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Maximum input size (500 MB default).
pub const MAX_INPUT_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Json,
    Csv,
    /// Any workbook format the spreadsheet reader understands.
    Excel,
}

impl FileKind {
    /// Detects the format from a file extension (case-insensitive).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "xls" | "xlsx" | "xlsm" | "xlsb" | "ods" => Some(Self::Excel),
            _ => None,
        }
    }

    /// Detects the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");
        Self::from_extension(extension).ok_or_else(|| IngestError::UnsupportedFileType {
            path: path.to_path_buf(),
            extension: extension.to_string(),
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Excel => "excel",
        }
    }

    /// Returns true for formats read as UTF-8 text.
    pub fn is_text(self) -> bool {
        matches!(self, Self::Json | Self::Csv)
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_INPUT_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::read(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Rejects text files that start with a UTF-16 byte order mark.
///
/// A UTF-8 BOM is accepted and stripped by the readers.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::read(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file
        .read(&mut buffer)
        .map_err(|e| IngestError::read(path, e))?;

    if bytes_read == 2 {
        let encoding = match buffer {
            [0xFF, 0xFE] => Some("UTF-16 LE"),
            [0xFE, 0xFF] => Some("UTF-16 BE"),
            _ => None,
        };
        if let Some(encoding) = encoding {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn detects_kind_from_extension() {
        assert_eq!(FileKind::from_path(Path::new("a.JSON")).unwrap(), FileKind::Json);
        assert_eq!(FileKind::from_path(Path::new("dir/b.csv")).unwrap(), FileKind::Csv);
        assert_eq!(FileKind::from_path(Path::new("c.xlsx")).unwrap(), FileKind::Excel);
        assert_eq!(FileKind::from_path(Path::new("d.xls")).unwrap(), FileKind::Excel);
        assert!(matches!(
            FileKind::from_path(Path::new("e.txt")),
            Err(IngestError::UnsupportedFileType { .. })
        ));
        assert!(matches!(
            FileKind::from_path(Path::new("no_extension")),
            Err(IngestError::UnsupportedFileType { .. })
        ));
    }

    #[test]
    fn size_limit() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "0123456789").unwrap();

        assert!(check_file_size_with_limit(file.path(), 10).is_ok());
        assert!(matches!(
            check_file_size_with_limit(file.path(), 9),
            Err(IngestError::FileTooLarge { size: 10, .. })
        ));
        assert!(matches!(
            check_file_size(Path::new("/definitely/not/here.csv")),
            Err(IngestError::FileNotFound { .. })
        ));
    }

    #[test]
    fn rejects_utf16_bom() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE, b'a', 0]).unwrap();
        assert!(matches!(
            validate_encoding(file.path()),
            Err(IngestError::UnsupportedEncoding { encoding: "UTF-16 LE", .. })
        ));

        let mut utf8 = NamedTempFile::new().unwrap();
        write!(utf8, "\u{feff}a,b\n").unwrap();
        assert!(validate_encoding(utf8.path()).is_ok());
    }
}
