//! Household unit representation
//!
//! This module contains the Household model and the collection type holding
//! every household parsed from one source. A household is one contiguous
//! block of resident rows, closed by the next marker row or end-of-input.

use super::resident::Resident;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A household reconstructed from one block of resident rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Household {
    residents: Vec<Resident>,
}

impl Household {
    /// Create a household from buffered residents, in row order
    #[must_use]
    pub const fn new(residents: Vec<Resident>) -> Self {
        Self { residents }
    }

    /// Number of residents in the household
    #[must_use]
    pub fn resident_count(&self) -> usize {
        self.residents.len()
    }

    /// The residents in row order
    #[must_use]
    pub fn residents(&self) -> &[Resident] {
        &self.residents
    }

    /// The distinct relationship labels present in the household
    #[must_use]
    pub fn relationship_labels(&self) -> FxHashSet<&str> {
        self.residents
            .iter()
            .map(|r| r.relationship.as_str())
            .collect()
    }
}

/// Collection of households parsed from one source, in parse order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdCollection {
    households: Vec<Household>,
}

impl HouseholdCollection {
    /// Create an empty collection
    #[must_use]
    pub const fn new() -> Self {
        Self {
            households: Vec::new(),
        }
    }

    /// Add a household to the collection
    pub fn add_household(&mut self, household: Household) {
        self.households.push(household);
    }

    /// Number of households in the collection
    #[must_use]
    pub fn household_count(&self) -> usize {
        self.households.len()
    }

    /// Total number of residents across all households
    #[must_use]
    pub fn resident_count(&self) -> usize {
        self.households.iter().map(Household::resident_count).sum()
    }

    /// Get a household by position in parse order
    #[must_use]
    pub fn get_household(&self, index: usize) -> Option<&Household> {
        self.households.get(index)
    }

    /// The households in parse order
    #[must_use]
    pub fn households(&self) -> &[Household] {
        &self.households
    }
}
