//! Generation-depth classification
//!
//! Approximates how many generations live in a household from its
//! residents' relationship labels. A label can belong to several of the
//! six tiers; the household's generation count is the number of distinct
//! tiers its labels match. The sentinel label short-circuits the whole
//! household to indeterminate.

use crate::models::{Household, HouseholdCollection};
use crate::vocabulary::RelationshipVocabulary;
use itertools::Itertools;
use serde::Serialize;

/// Generation depth of one household
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GenerationDepth {
    /// Exactly one tier matched
    Single,
    /// Exactly two tiers matched
    Two,
    /// Exactly three tiers matched
    Three,
    /// Sentinel label present, or a tier count outside 1..=3
    Indeterminate,
}

/// Household tallies by generation depth
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenerationTally {
    /// Households spanning a single generation
    pub single_generation: usize,
    /// Households spanning two generations
    pub two_generation: usize,
    /// Households spanning three generations
    pub three_generation: usize,
    /// Households whose depth could not be determined
    pub indeterminate: usize,
}

impl GenerationTally {
    /// Total number of households tallied.
    ///
    /// Always equals the size of the classified collection: the four
    /// buckets partition it.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.single_generation + self.two_generation + self.three_generation + self.indeterminate
    }
}

/// Functions for generation-depth classification
pub struct GenerationClassifier;

impl GenerationClassifier {
    /// Classify one household by generation depth.
    ///
    /// Any resident carrying the sentinel label makes the household
    /// indeterminate before any tier is evaluated. Labels belonging to no
    /// tier contribute nothing; matched-tier counts of 0 or above 3 are
    /// indeterminate as well.
    #[must_use]
    pub fn classify(
        household: &Household,
        vocabulary: &RelationshipVocabulary,
    ) -> GenerationDepth {
        if household
            .residents()
            .iter()
            .any(|r| vocabulary.is_sentinel(&r.relationship))
        {
            return GenerationDepth::Indeterminate;
        }

        let tier_count = household
            .residents()
            .iter()
            .flat_map(|r| vocabulary.tiers_for(&r.relationship))
            .unique()
            .count();

        match tier_count {
            1 => GenerationDepth::Single,
            2 => GenerationDepth::Two,
            3 => GenerationDepth::Three,
            _ => GenerationDepth::Indeterminate,
        }
    }

    /// Tally every household in the collection by generation depth
    #[must_use]
    pub fn tally(
        collection: &HouseholdCollection,
        vocabulary: &RelationshipVocabulary,
    ) -> GenerationTally {
        let mut tally = GenerationTally::default();
        for household in collection.households() {
            match Self::classify(household, vocabulary) {
                GenerationDepth::Single => tally.single_generation += 1,
                GenerationDepth::Two => tally.two_generation += 1,
                GenerationDepth::Three => tally.three_generation += 1,
                GenerationDepth::Indeterminate => tally.indeterminate += 1,
            }
        }
        tally
    }
}
