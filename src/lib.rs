//! A Rust library for reading household census spreadsheets and computing
//! demographic statistics.
//!
//! The pipeline reads one sheet of an `.xlsx` workbook, groups its
//! sentinel-delimited rows into households, and computes age-bracket,
//! household-composition, and generation-depth statistics over the result.

pub mod config;
pub mod dates;
pub mod error;
pub mod generations;
pub mod grouper;
pub mod loader;
pub mod models;
pub mod report;
pub mod source;
pub mod statistics;
pub mod vocabulary;

// Re-export the most common types for easier use
// Core types
pub use config::CensusConfig;
pub use error::{CensusError, Result};
pub use models::{Household, HouseholdCollection, Resident};

// Row sources
pub use source::{CellRow, CellRowSource, CellValue, WorkbookSource};

// Pipeline entry points
pub use loader::{analyze_collection, analyze_workbook, load_from_source, load_workbook};

// Analysis passes and their results
pub use generations::{GenerationClassifier, GenerationDepth, GenerationTally};
pub use report::CensusReport;
pub use statistics::{DemographicStatistics, DemographicStats};
pub use vocabulary::RelationshipVocabulary;
