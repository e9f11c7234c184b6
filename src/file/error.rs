// src/file/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Workbook not found: {}", .0.display())]
    WorkbookNotFound(PathBuf),
    #[error("Failed to open workbook {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },
    #[error("Worksheet '{sheet}' not found (available: {})", .available.join(", "))]
    SheetNotFound { sheet: String, available: Vec<String> },
    #[error("Failed to read worksheet '{sheet}': {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::XlsxError,
    },
    #[error("Worksheet '{0}' has no header row")]
    MissingHeader(String),
    #[error("Column '{0}' not found in header row")]
    MissingColumn(String),
    #[error("Row {row}, column '{column}': expected a number, found '{value}'")]
    NotNumeric {
        row: usize,
        column: String,
        value: String,
    },
}
