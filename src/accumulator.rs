//! Structural accumulation: one pass over a normalized step chain.
//!
//! The scan folds the chain into four counters plus a gender signal:
//!
//! - `up`: generations toward ancestors
//! - `down`: generations toward descendants
//! - `lateral`: number of sibling hops
//! - `affinal`: whether any marriage edge was crossed
//!
//! A sibling hop models "go up to the shared parent, come back down on a
//! different branch", so it increments both `up` and `down` in addition to
//! `lateral`. The `affinal` flag is monotonic: once set it stays set.

use serde::{Deserialize, Serialize};

use crate::canonical::to_canonical_string;
use crate::types::{Gender, Step};

/// Accumulated structural counters for a step chain.
///
/// The classifier's decision depends only on these four values, the final
/// gender, the chain length, and the last step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSummary {
    /// Generations toward ancestors.
    pub up: u32,
    /// Generations toward descendants.
    pub down: u32,
    /// Number of sibling hops.
    pub lateral: u32,
    /// True when any spouse-type step was crossed.
    pub affinal: bool,
}

impl PathSummary {
    /// Stable, human-inspectable serialization of the summary.
    ///
    /// This is the `canonical` field of a resolution result; the format is
    /// fixed JSON with declaration field order.
    pub fn canonical_string(&self) -> String {
        to_canonical_string(self)
    }
}

/// Result of scanning a normalized step chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathScan {
    /// Accumulated counters.
    pub summary: PathSummary,
    /// Gender of the final person, when the last gendered token determined
    /// one. Neutral tokens reset this to `None`.
    pub final_gender: Option<Gender>,
    /// Last step of the original sequence, unrecognized steps included.
    pub last: Option<Step>,
    /// Length of the original sequence.
    pub len: usize,
}

impl PathScan {
    /// True when the chain is exactly one spousal step (direct spouse).
    pub fn is_direct_spouse(&self) -> bool {
        self.len == 1 && self.last.as_ref().is_some_and(Step::is_spousal)
    }

    /// True when the chain ends on a sibling-type step.
    pub fn ends_on_sibling(&self) -> bool {
        self.last.as_ref().is_some_and(Step::is_sibling)
    }
}

/// Scan a normalized chain left to right into a [`PathScan`].
///
/// Deterministic single pass, no partial results. Unrecognized steps change
/// no counter and leave the gender signal untouched, but still occupy their
/// sequence position (the retained last step may be unrecognized).
pub fn scan(steps: &[Step]) -> PathScan {
    let mut summary = PathSummary::default();
    let mut final_gender: Option<Gender> = None;

    for step in steps {
        if step.is_parental() {
            summary.up += 1;
            final_gender = step.gender();
        } else if step.is_filial() {
            summary.down += 1;
            final_gender = step.gender();
        } else if step.is_sibling() {
            summary.up += 1;
            summary.down += 1;
            summary.lateral += 1;
            final_gender = step.gender();
        } else if step.is_spousal() {
            summary.affinal = true;
            final_gender = step.gender();
        }
        // Unrecognized: structurally inert, gender signal retained.
    }

    PathScan {
        summary,
        final_gender,
        last: steps.last().cloned(),
        len: steps.len(),
    }
}
