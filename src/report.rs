//! Report assembly
//!
//! Bundles every computed statistic into one ordered, labeled report for
//! the output surface.

use std::fmt;

use serde::Serialize;

use crate::generations::GenerationTally;
use crate::statistics::DemographicStats;

/// The full set of labeled counts for one census run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CensusReport {
    /// Age-bracket and composition counts
    pub stats: DemographicStats,
    /// Generation-depth tallies
    pub generations: GenerationTally,
}

impl CensusReport {
    /// Create a report from the two analysis passes
    #[must_use]
    pub const fn new(stats: DemographicStats, generations: GenerationTally) -> Self {
        Self { stats, generations }
    }

    /// The labeled counts, in fixed report order
    #[must_use]
    pub fn lines(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("residents aged 16 or under", self.stats.minors),
            ("residents aged 60 or over", self.stats.seniors),
            ("residents aged between 17 and 59", self.stats.working_age),
            (
                "households with a resident aged 60 or over",
                self.stats.households_with_seniors,
            ),
            (
                "households with a resident aged 16 or under",
                self.stats.households_with_minors,
            ),
            (
                "single-parent households with children",
                self.stats.single_parent_households,
            ),
            (
                "single-generation households",
                self.generations.single_generation,
            ),
            ("two-generation households", self.generations.two_generation),
            (
                "three-generation households",
                self.generations.three_generation,
            ),
            (
                "households with indeterminate generations",
                self.generations.indeterminate,
            ),
        ]
    }
}

impl fmt::Display for CensusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Census Summary:")?;
        for (label, count) in self.lines() {
            writeln!(f, "  {label}: {count}")?;
        }
        Ok(())
    }
}
