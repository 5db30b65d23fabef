//! Residency record representation
//!
//! This module contains the Resident model, one entry per spreadsheet row.
//! Residents are created during grouping and never mutated afterwards.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single residency record parsed from one spreadsheet row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resident {
    /// Full name of the resident
    pub name: String,
    /// Date of birth (year-only records default to January 1st)
    pub birth_date: NaiveDate,
    /// Relationship to the household head, trimmed; empty when the source omits it
    pub relationship: String,
}

impl Resident {
    /// Create a new resident record
    #[must_use]
    pub const fn new(name: String, birth_date: NaiveDate, relationship: String) -> Self {
        Self {
            name,
            birth_date,
            relationship,
        }
    }

    /// Calculate the resident's age in whole years at a reference date
    #[must_use]
    pub fn age_at(&self, reference_date: &NaiveDate) -> i32 {
        let years = reference_date.year() - self.birth_date.year();
        // Adjust for birthday not yet reached in the reference year
        if reference_date.month() < self.birth_date.month()
            || (reference_date.month() == self.birth_date.month()
                && reference_date.day() < self.birth_date.day())
        {
            years - 1
        } else {
            years
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test resident with the given birth date
    fn create_test_resident(year: i32, month: u32, day: u32) -> Resident {
        Resident::new(
            "Test Resident".to_string(),
            NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            "child".to_string(),
        )
    }

    #[test]
    fn test_age_at_after_birthday() {
        let resident = create_test_resident(1990, 3, 15);
        let reference = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
        assert_eq!(resident.age_at(&reference), 30);
    }

    #[test]
    fn test_age_at_before_birthday() {
        let resident = create_test_resident(1990, 3, 15);
        let reference = NaiveDate::from_ymd_opt(2020, 3, 14).unwrap();
        assert_eq!(resident.age_at(&reference), 29);
    }

    #[test]
    fn test_age_at_on_birthday() {
        let resident = create_test_resident(1990, 3, 15);
        let reference = NaiveDate::from_ymd_opt(2020, 3, 15).unwrap();
        assert_eq!(resident.age_at(&reference), 30);
    }
}
