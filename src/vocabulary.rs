//! Relationship-label vocabulary
//!
//! The generation tier sets, the indeterminate sentinel, and the permitted
//! single-parent labels are hand-curated, convention-specific data. They
//! live in one serde-loadable table so the labeling policy can be audited
//! or replaced without touching the counting code.

use std::fmt;
use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{CensusError, Result};

/// Number of generation tiers, ordered eldest first
pub const TIER_COUNT: usize = 6;

/// Label table driving generation classification and the single-parent rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipVocabulary {
    /// Label sets for tiers 0 (eldest) through 5
    tiers: [FxHashSet<String>; TIER_COUNT],
    /// Label that forces a household's classification to indeterminate
    sentinel: String,
    /// Labels a single-parent household may use
    single_parent_labels: FxHashSet<String>,
}

impl Default for RelationshipVocabulary {
    fn default() -> Self {
        Self {
            tiers: [
                labels(&["grandmother"]),
                labels(&["mother", "father"]),
                labels(&[
                    "elder sister",
                    "younger sibling",
                    "wife",
                    "husband",
                    "elder brother",
                ]),
                labels(&["child", "daughter-in-law", "son-in-law"]),
                labels(&["grandchild"]),
                labels(&["great-grandchild"]),
            ],
            sentinel: "other/unknown".to_string(),
            single_parent_labels: labels(&["child", "mother", "father", "head of household"]),
        }
    }
}

impl RelationshipVocabulary {
    /// Load a vocabulary table from a JSON file, replacing the built-in
    /// table wholesale
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| CensusError::Vocabulary {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| CensusError::Vocabulary {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })
    }

    /// Tier indices whose label sets contain the given label.
    ///
    /// Tiers are not mutually exclusive; a label can belong to several.
    /// Labels in no tier contribute nothing.
    #[must_use]
    pub fn tiers_for(&self, label: &str) -> SmallVec<[usize; 2]> {
        self.tiers
            .iter()
            .enumerate()
            .filter(|(_, set)| set.contains(label))
            .map(|(index, _)| index)
            .collect()
    }

    /// True when the label is the indeterminate sentinel
    #[must_use]
    pub fn is_sentinel(&self, label: &str) -> bool {
        label == self.sentinel
    }

    /// True when the label may appear in a single-parent household
    #[must_use]
    pub fn is_single_parent_label(&self, label: &str) -> bool {
        self.single_parent_labels.contains(label)
    }

    /// Total number of labels across all tiers
    #[must_use]
    pub fn tier_label_count(&self) -> usize {
        self.tiers.iter().map(FxHashSet::len).sum()
    }
}

impl fmt::Display for RelationshipVocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Relationship vocabulary: {} tiers covering {} labels, sentinel '{}'",
            TIER_COUNT,
            self.tier_label_count(),
            self.sentinel
        )
    }
}

fn labels(values: &[&str]) -> FxHashSet<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}
