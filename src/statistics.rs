//! Demographic statistics over the household collection
//!
//! This module provides the age-bracket and household-composition counts.
//! Every statistic is an independent pure fold over the immutable
//! collection, so the folds run in parallel.

use crate::models::{Household, HouseholdCollection};
use crate::vocabulary::RelationshipVocabulary;
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Serialize;

/// Counts produced by one statistics pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DemographicStats {
    /// Residents aged 16 or under
    pub minors: usize,
    /// Residents aged 60 or over
    pub seniors: usize,
    /// Residents aged strictly between 16 and 60
    pub working_age: usize,
    /// Households with at least one resident aged 60 or over
    pub households_with_seniors: usize,
    /// Households with at least one resident aged 16 or under
    pub households_with_minors: usize,
    /// Households matching the single-parent composition rule
    pub single_parent_households: usize,
}

/// Functions for demographic statistics
pub struct DemographicStatistics;

impl DemographicStatistics {
    /// Calculate every statistic for a household collection
    #[must_use]
    pub fn calculate(
        collection: &HouseholdCollection,
        vocabulary: &RelationshipVocabulary,
        reference_date: &NaiveDate,
    ) -> DemographicStats {
        DemographicStats {
            minors: Self::count_minors(collection, reference_date),
            seniors: Self::count_seniors(collection, reference_date),
            working_age: Self::count_working_age(collection, reference_date),
            households_with_seniors: Self::count_households_with_seniors(
                collection,
                reference_date,
            ),
            households_with_minors: Self::count_households_with_minors(collection, reference_date),
            single_parent_households: Self::count_single_parent_households(collection, vocabulary),
        }
    }

    /// Count residents aged 16 or under across all households
    #[must_use]
    pub fn count_minors(collection: &HouseholdCollection, reference_date: &NaiveDate) -> usize {
        Self::count_residents(collection, |age| age <= 16, reference_date)
    }

    /// Count residents aged 60 or over across all households
    #[must_use]
    pub fn count_seniors(collection: &HouseholdCollection, reference_date: &NaiveDate) -> usize {
        Self::count_residents(collection, |age| age >= 60, reference_date)
    }

    /// Count residents aged strictly between 16 and 60.
    ///
    /// Both bounds are exclusive: ages exactly 16 and exactly 60 belong to
    /// the inclusive brackets, never to this one.
    #[must_use]
    pub fn count_working_age(
        collection: &HouseholdCollection,
        reference_date: &NaiveDate,
    ) -> usize {
        Self::count_residents(collection, |age| age > 16 && age < 60, reference_date)
    }

    /// Count households with at least one resident aged 60 or over
    #[must_use]
    pub fn count_households_with_seniors(
        collection: &HouseholdCollection,
        reference_date: &NaiveDate,
    ) -> usize {
        Self::count_households(collection, |household| {
            household
                .residents()
                .iter()
                .any(|r| r.age_at(reference_date) >= 60)
        })
    }

    /// Count households with at least one resident aged 16 or under
    #[must_use]
    pub fn count_households_with_minors(
        collection: &HouseholdCollection,
        reference_date: &NaiveDate,
    ) -> usize {
        Self::count_households(collection, |household| {
            household
                .residents()
                .iter()
                .any(|r| r.age_at(reference_date) <= 16)
        })
    }

    /// Count households matching the single-parent composition rule:
    /// every relationship label is drawn from the permitted set, and
    /// exactly two distinct labels are present.
    ///
    /// One out-of-set label excludes the household outright, and three or
    /// more distinct permitted labels also fail the rule, so compositions
    /// like head of household + mother + child are not counted.
    #[must_use]
    pub fn count_single_parent_households(
        collection: &HouseholdCollection,
        vocabulary: &RelationshipVocabulary,
    ) -> usize {
        Self::count_households(collection, |household| {
            let all_permitted = household
                .residents()
                .iter()
                .all(|r| vocabulary.is_single_parent_label(&r.relationship));
            all_permitted && household.relationship_labels().len() == 2
        })
    }

    /// Sum a resident-level age predicate over the whole collection
    fn count_residents(
        collection: &HouseholdCollection,
        predicate: impl Fn(i32) -> bool + Sync,
        reference_date: &NaiveDate,
    ) -> usize {
        collection
            .households()
            .par_iter()
            .map(|household| {
                household
                    .residents()
                    .iter()
                    .filter(|r| predicate(r.age_at(reference_date)))
                    .count()
            })
            .sum()
    }

    /// Count households satisfying a household-level predicate
    fn count_households(
        collection: &HouseholdCollection,
        predicate: impl Fn(&Household) -> bool + Sync,
    ) -> usize {
        collection
            .households()
            .par_iter()
            .filter(|household| predicate(household))
            .count()
    }
}
