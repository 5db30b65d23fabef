//! Sentinel-delimited household grouping
//!
//! The source spreadsheet encodes households as contiguous blocks of
//! resident rows. A row with a non-blank first column marks the boundary
//! before a new household and carries household-level metadata the core
//! discards; the rows that follow it are resident records until the next
//! marker. Grouping is a single fold over the row sequence with an
//! explicit accumulator.

use crate::dates::parse_birth_date;
use crate::error::{CensusError, Result};
use crate::models::{Household, HouseholdCollection, Resident};
use crate::source::{CellRow, CellValue};
use log::{info, warn};

/// Zero-based column holding the household marker
pub const MARKER_COLUMN: usize = 0;
/// Zero-based column holding the resident name
pub const NAME_COLUMN: usize = 3;
/// Zero-based column holding the date-of-birth text
pub const BIRTH_DATE_COLUMN: usize = 5;
/// Zero-based column holding the relationship label
pub const RELATIONSHIP_COLUMN: usize = 8;

/// Accumulator for the grouping fold
#[derive(Debug, Default)]
struct GroupingState {
    collection: HouseholdCollection,
    pending: Vec<Resident>,
}

impl GroupingState {
    /// Close the pending resident block into a household, if non-empty.
    /// Empty blocks close silently, so consecutive markers emit nothing.
    fn close_pending(&mut self) {
        if !self.pending.is_empty() {
            let residents = std::mem::take(&mut self.pending);
            self.collection.add_household(Household::new(residents));
        }
    }
}

/// Group an ordered row sequence into households.
///
/// Rows with no cells at all are skipped. A marker row closes the pending
/// resident block and is itself discarded; every other row is parsed as a
/// resident record. A malformed resident row aborts the whole load; no
/// partial collection is returned.
pub fn group_rows(rows: &[CellRow]) -> Result<HouseholdCollection> {
    let mut state = GroupingState::default();

    for row in rows {
        if row.is_empty() {
            continue;
        }
        if is_marker_row(row) {
            state.close_pending();
            continue;
        }
        let resident = parse_resident_row(row)?;
        state.pending.push(resident);
    }
    // Residents still buffered at end-of-input form the final household
    state.close_pending();

    info!(
        "Grouped {} rows into {} households ({} residents)",
        rows.len(),
        state.collection.household_count(),
        state.collection.resident_count()
    );
    Ok(state.collection)
}

/// A row whose marker column holds any non-blank value ends the current
/// household block. An absent marker cell reads as blank.
fn is_marker_row(row: &CellRow) -> bool {
    match row.cell(MARKER_COLUMN) {
        Some(CellValue::Text(text)) => !text.trim().is_empty(),
        Some(_) => true,
        None => false,
    }
}

/// Parse one resident record from a row
fn parse_resident_row(row: &CellRow) -> Result<Resident> {
    let name = require_text(row, NAME_COLUMN, "resident name")?;
    let birth_text = require_text(row, BIRTH_DATE_COLUMN, "date of birth")?;
    let birth_date = parse_birth_date(&birth_text).ok_or_else(|| {
        CensusError::parse(
            row.index,
            BIRTH_DATE_COLUMN,
            format!("date text '{birth_text}' matches neither recognized format"),
        )
    })?;

    // Degraded inputs omit the relationship label; an absent cell is
    // tolerated, a wrong-typed one is not
    let relationship = match optional_text(row, RELATIONSHIP_COLUMN, "relationship label")? {
        Some(text) => text.trim().to_string(),
        None => String::new(),
    };
    if relationship.is_empty() {
        warn!("Resident row {} has no relationship label", row.index);
    }

    Ok(Resident::new(name, birth_date, relationship))
}

/// Extract a required text cell
fn require_text(row: &CellRow, column: usize, field: &str) -> Result<String> {
    match row.cell(column) {
        Some(CellValue::Text(text)) => Ok(text.clone()),
        Some(other) => Err(CensusError::parse(
            row.index,
            column,
            format!("expected text for {field}, found {}", other.type_name()),
        )),
        None => Err(CensusError::parse(
            row.index,
            column,
            format!("missing {field} cell"),
        )),
    }
}

/// Extract an optional text cell; absence is fine, a wrong type is not
fn optional_text(row: &CellRow, column: usize, field: &str) -> Result<Option<String>> {
    match row.cell(column) {
        Some(CellValue::Text(text)) => Ok(Some(text.clone())),
        Some(other) => Err(CensusError::parse(
            row.index,
            column,
            format!("expected text for {field}, found {}", other.type_name()),
        )),
        None => Ok(None),
    }
}
