//! Workbook-backed row source.

use std::path::PathBuf;

use log::info;
use umya_spreadsheet::reader::xlsx;

use super::{CellRow, CellRowSource, CellValue};
use crate::error::{CensusError, Result};

/// Row source reading one sheet of an `.xlsx` workbook
#[derive(Debug, Clone)]
pub struct WorkbookSource {
    path: PathBuf,
    sheet: String,
}

impl WorkbookSource {
    /// Create a source for the given workbook path and sheet name
    pub fn new(path: impl Into<PathBuf>, sheet: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            sheet: sheet.into(),
        }
    }
}

impl CellRowSource for WorkbookSource {
    /// Read the selected sheet into owned rows.
    ///
    /// Cells are taken as the sheet renders them: non-empty text verbatim,
    /// empty renditions as absent. The workbook itself is dropped before
    /// this function returns.
    fn into_rows(self) -> Result<Vec<CellRow>> {
        let book = xlsx::read(&self.path).map_err(|e| CensusError::SourceOpen {
            path: self.path.clone(),
            detail: e.to_string(),
        })?;
        let sheet = book
            .get_sheet_by_name(&self.sheet)
            .ok_or_else(|| CensusError::SheetNotFound {
                name: self.sheet.clone(),
            })?;

        let (highest_column, highest_row) = sheet.get_highest_column_and_row();
        let mut rows = Vec::with_capacity(highest_row as usize);
        for row_index in 1..=highest_row {
            let mut cells: Vec<Option<CellValue>> = Vec::with_capacity(highest_column as usize);
            for column_index in 1..=highest_column {
                let cell = sheet
                    .get_cell((column_index, row_index))
                    .map(|cell| cell.get_value())
                    .filter(|raw| !raw.is_empty())
                    .map(|raw| CellValue::Text(raw.to_string()));
                cells.push(cell);
            }
            // A row is only as wide as its last occupied cell; rows with no
            // occupied cells at all read as empty
            while cells.last().is_some_and(Option::is_none) {
                cells.pop();
            }
            rows.push(CellRow::new(row_index as usize, cells));
        }

        info!(
            "Extracted {} rows from sheet '{}' of {}",
            rows.len(),
            self.sheet,
            self.path.display()
        );
        Ok(rows)
    }
}
