//! Row sources feeding the household grouper
//!
//! A source yields ordered rows of typed cells. The shipped implementation
//! reads one sheet of an `.xlsx` workbook; tests and embedding callers can
//! supply rows directly.

pub mod workbook;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use workbook::WorkbookSource;

/// A single cell value from a tabular source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Textual content, taken verbatim from the source
    Text(String),
    /// Numeric content
    Number(f64),
    /// Boolean content
    Bool(bool),
}

impl CellValue {
    /// Short description of the value's type, for error messages
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
        }
    }
}

/// One row of cells, addressed by zero-based column position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellRow {
    /// Row index as reported by the source (workbook rows are 1-based)
    pub index: usize,
    /// Cells in column order; `None` marks an absent or blank cell
    pub cells: Vec<Option<CellValue>>,
}

impl CellRow {
    /// Create a row from its source index and cells
    #[must_use]
    pub const fn new(index: usize, cells: Vec<Option<CellValue>>) -> Self {
        Self { index, cells }
    }

    /// True when the row has no cells at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the cell at a zero-based column, if present and non-blank
    #[must_use]
    pub fn cell(&self, column: usize) -> Option<&CellValue> {
        self.cells.get(column).and_then(Option::as_ref)
    }
}

/// A source of ordered cell rows
///
/// Extraction consumes the source, so any underlying file handle is
/// released before grouping begins.
pub trait CellRowSource {
    /// Extract every row in order
    fn into_rows(self) -> Result<Vec<CellRow>>;
}

impl CellRowSource for Vec<CellRow> {
    fn into_rows(self) -> Result<Vec<CellRow>> {
        Ok(self)
    }
}
