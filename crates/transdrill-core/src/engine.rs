//! Check engine.
//!
//! Ties the aligner and the feedback tiers together for one learner answer.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::align::compare;
use crate::feedback::TierTable;
use crate::model::AlignmentResult;

/// Outcome of checking one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Word-level alignment of the answer against the reference.
    pub alignment: AlignmentResult,
    /// Name of the tier the error count fell into.
    pub tier: Option<String>,
    /// The feedback message picked from that tier.
    pub feedback: Option<String>,
}

impl CheckOutcome {
    pub fn error_count(&self) -> usize {
        self.alignment.error_count()
    }
}

/// Checks learner answers against reference sentences.
#[derive(Debug, Clone, Default)]
pub struct CheckEngine {
    tiers: TierTable,
}

impl CheckEngine {
    pub fn new(tiers: TierTable) -> Self {
        Self { tiers }
    }

    pub fn tiers(&self) -> &TierTable {
        &self.tiers
    }

    /// Align `candidate` against `reference` and pick feedback with `choose`.
    pub fn check(
        &self,
        reference: &str,
        candidate: &str,
        choose: impl FnMut(usize) -> usize,
    ) -> CheckOutcome {
        let alignment = compare(reference, candidate);
        let errors = alignment.error_count();
        let tier = self.tiers.tier_for(errors).map(|t| t.name.clone());
        let feedback = self.tiers.select(errors, choose).map(str::to_owned);

        tracing::debug!(
            entries = alignment.len(),
            errors,
            tier = tier.as_deref().unwrap_or("-"),
            "checked answer"
        );

        CheckOutcome {
            alignment,
            tier,
            feedback,
        }
    }

    /// Like [`CheckEngine::check`], drawing the feedback index from `rng`.
    pub fn check_with_rng<R: Rng>(
        &self,
        reference: &str,
        candidate: &str,
        rng: &mut R,
    ) -> CheckOutcome {
        self.check(reference, candidate, |n| rng.gen_range(0..n))
    }
}
