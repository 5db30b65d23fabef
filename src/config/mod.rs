//! Runtime configuration for a census run.

use std::fmt;

use chrono::{Local, NaiveDate};

use crate::vocabulary::RelationshipVocabulary;

/// Configuration for loading and analyzing a census workbook
#[derive(Debug, Clone)]
pub struct CensusConfig {
    /// Reference date for age computation
    pub reference_date: NaiveDate,
    /// Name of the sheet holding the census rows
    pub sheet: String,
    /// Relationship-label vocabulary driving classification
    pub vocabulary: RelationshipVocabulary,
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self {
            reference_date: Local::now().date_naive(),
            sheet: "Sheet1".to_string(),
            vocabulary: RelationshipVocabulary::default(),
        }
    }
}

impl fmt::Display for CensusConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Census Configuration:")?;
        writeln!(f, "  Reference Date: {}", self.reference_date)?;
        writeln!(f, "  Sheet: {}", self.sheet)?;
        write!(f, "  {}", self.vocabulary)
    }
}
