//! Census loading and analysis pipeline
//!
//! Ties the stages together: open a workbook, extract its rows, group them
//! into households, then run the two analysis passes over the collection.

use crate::config::CensusConfig;
use crate::error::Result;
use crate::generations::GenerationClassifier;
use crate::grouper;
use crate::models::HouseholdCollection;
use crate::report::CensusReport;
use crate::source::{CellRowSource, WorkbookSource};
use crate::statistics::DemographicStatistics;
use log::info;
use std::path::Path;

/// Load households from one sheet of an `.xlsx` workbook.
///
/// The workbook is opened, its rows extracted, and the file released
/// before grouping begins.
pub fn load_workbook(path: &Path, sheet: &str) -> Result<HouseholdCollection> {
    info!("Loading census workbook: {}", path.display());
    load_from_source(WorkbookSource::new(path, sheet))
}

/// Load households from any row source
pub fn load_from_source(source: impl CellRowSource) -> Result<HouseholdCollection> {
    let rows = source.into_rows()?;
    grouper::group_rows(&rows)
}

/// Load a workbook and compute the full report in one step
pub fn analyze_workbook(path: &Path, config: &CensusConfig) -> Result<CensusReport> {
    let collection = load_workbook(path, &config.sheet)?;
    Ok(analyze_collection(&collection, config))
}

/// Compute every statistic over an already-loaded collection
#[must_use]
pub fn analyze_collection(
    collection: &HouseholdCollection,
    config: &CensusConfig,
) -> CensusReport {
    let stats = DemographicStatistics::calculate(
        collection,
        &config.vocabulary,
        &config.reference_date,
    );
    let generations = GenerationClassifier::tally(collection, &config.vocabulary);
    CensusReport::new(stats, generations)
}
