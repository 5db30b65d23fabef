//! Error handling for the census reader.

use std::path::PathBuf;

/// Errors that can occur while loading a census workbook
#[derive(Debug, thiserror::Error)]
pub enum CensusError {
    /// The workbook file could not be opened or decoded
    #[error("Failed to open workbook {}: {detail}", .path.display())]
    SourceOpen { path: PathBuf, detail: String },

    /// The requested sheet does not exist in the workbook
    #[error("Sheet not found in workbook: {name}")]
    SheetNotFound { name: String },

    /// A row violated the grouping contract
    #[error("Parse error at row {row}, column {column}: {detail}")]
    Parse {
        row: usize,
        column: usize,
        detail: String,
    },

    /// A vocabulary table could not be read or decoded
    #[error("Failed to load vocabulary table {}: {detail}", .path.display())]
    Vocabulary { path: PathBuf, detail: String },
}

impl CensusError {
    /// Build a `Parse` error for the given row and column
    #[must_use]
    pub fn parse(row: usize, column: usize, detail: impl Into<String>) -> Self {
        Self::Parse {
            row,
            column,
            detail: detail.into(),
        }
    }
}

/// Alias for Result with `CensusError`
pub type Result<T> = std::result::Result<T, CensusError>;
