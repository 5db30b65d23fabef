//! Domain models for the census reader
//!
//! This module contains the core entity models: residency records and the
//! households they group into.

pub mod household;
pub mod resident;

// Re-export commonly used types
pub use household::{Household, HouseholdCollection};
pub use resident::Resident;
