//! Feedback tiers and message selection.
//!
//! A [`TierTable`] maps every possible error count to exactly one
//! [`FeedbackTier`]. Tables are validated when built, so lookups never hit a
//! gap at runtime.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::TierTableError;

/// A contiguous, inclusive range of error counts and the messages shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackTier {
    /// Short identifier (e.g. "perfect").
    pub name: String,
    /// Lowest error count in this tier.
    pub min: usize,
    /// Highest error count in this tier; `None` means unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
    /// Candidate messages, one of which is picked per check.
    pub messages: Vec<String>,
}

impl FeedbackTier {
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        min: usize,
        max: Option<usize>,
        messages: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            min,
            max,
            messages: messages.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `error_count` falls inside this tier.
    pub fn contains(&self, error_count: usize) -> bool {
        error_count >= self.min && self.max.map_or(true, |max| error_count <= max)
    }
}

/// An ordered list of tiers that partitions the non-negative integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FeedbackTier>", into = "Vec<FeedbackTier>")]
pub struct TierTable {
    tiers: Vec<FeedbackTier>,
}

impl TierTable {
    /// Validate and build a table.
    pub fn new(tiers: Vec<FeedbackTier>) -> Result<Self, TierTableError> {
        let Some(first) = tiers.first() else {
            return Err(TierTableError::Empty);
        };
        if first.min != 0 {
            return Err(TierTableError::DoesNotStartAtZero {
                name: first.name.clone(),
                min: first.min,
            });
        }

        for tier in &tiers {
            if tier.messages.is_empty() {
                return Err(TierTableError::NoMessages(tier.name.clone()));
            }
            if let Some(max) = tier.max {
                if max < tier.min {
                    return Err(TierTableError::InvertedRange {
                        name: tier.name.clone(),
                        min: tier.min,
                        max,
                    });
                }
            }
        }

        for pair in tiers.windows(2) {
            let (previous, next) = (&pair[0], &pair[1]);
            let Some(end) = previous.max else {
                return Err(TierTableError::UnboundedNotLast(previous.name.clone()));
            };
            if next.min <= end {
                return Err(TierTableError::Overlap {
                    previous: previous.name.clone(),
                    end,
                    next: next.name.clone(),
                    start: next.min,
                });
            }
            if next.min > end + 1 {
                return Err(TierTableError::Gap {
                    previous: previous.name.clone(),
                    end,
                    next: next.name.clone(),
                    start: next.min,
                });
            }
        }

        if let Some(last) = tiers.last() {
            if let Some(max) = last.max {
                return Err(TierTableError::BoundedLast {
                    name: last.name.clone(),
                    max,
                });
            }
        }

        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[FeedbackTier] {
        &self.tiers
    }

    /// The first tier containing `error_count`.
    pub fn tier_for(&self, error_count: usize) -> Option<&FeedbackTier> {
        self.tiers.iter().find(|t| t.contains(error_count))
    }

    /// Pick a message for `error_count`; see [`select_feedback`].
    pub fn select(&self, error_count: usize, choose: impl FnMut(usize) -> usize) -> Option<&str> {
        select_feedback(error_count, self, choose)
    }

    /// Pick a message uniformly at random from the matching tier.
    pub fn select_with_rng<R: Rng>(&self, error_count: usize, rng: &mut R) -> Option<&str> {
        self.select(error_count, |n| rng.gen_range(0..n))
    }
}

impl TryFrom<Vec<FeedbackTier>> for TierTable {
    type Error = TierTableError;

    fn try_from(tiers: Vec<FeedbackTier>) -> Result<Self, Self::Error> {
        Self::new(tiers)
    }
}

impl From<TierTable> for Vec<FeedbackTier> {
    fn from(table: TierTable) -> Self {
        table.tiers
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
        }
    }
}

/// Pick a feedback message for `error_count`.
///
/// Scans the tiers in order and asks `choose(n)` for an index in `0..n` into
/// the first matching tier's messages. Returns `None` when no tier matches or
/// `choose` hands back an index outside the pool.
pub fn select_feedback(
    error_count: usize,
    tiers: &TierTable,
    mut choose: impl FnMut(usize) -> usize,
) -> Option<&str> {
    let tier = tiers.tier_for(error_count)?;
    let index = choose(tier.messages.len());
    let message = tier.messages.get(index).map(String::as_str);
    if message.is_none() {
        tracing::warn!(
            tier = %tier.name,
            index,
            pool = tier.messages.len(),
            "feedback index out of range"
        );
    }
    message
}

/// The built-in tiers: 0, 1, 2-4, 5-8, 9-12, 13+.
pub fn default_tiers() -> Vec<FeedbackTier> {
    vec![
        FeedbackTier::new(
            "perfect",
            0,
            Some(0),
            [
                "Flawless. Every word is right!",
                "Perfect match. Keep it up!",
                "Nothing to fix here. Impressive.",
                "Wait, all of it? Nicely done.",
            ],
        ),
        FeedbackTier::new(
            "near-perfect",
            1,
            Some(1),
            [
                "So close. Just one slip.",
                "One word away from perfect.",
                "Almost there. Did you drop a little word?",
                "A single miss. Look again carefully.",
            ],
        ),
        FeedbackTier::new(
            "good",
            2,
            Some(4),
            [
                "Good effort. A few words to polish.",
                "Nearly there. Push a little harder!",
                "Solid attempt with a couple of slips.",
                "Not bad. Check the highlighted words.",
            ],
        ),
        FeedbackTier::new(
            "needs-improvement",
            5,
            Some(8),
            [
                "Plenty of room to improve.",
                "The idea is there, the wording is not yet.",
                "Take another look at the sentence structure.",
                "Keep practising. This one needs work.",
            ],
        ),
        FeedbackTier::new(
            "poor",
            9,
            Some(12),
            [
                "Quite a few mistakes this time.",
                "Try reading the source sentence again slowly.",
                "Most of this needs rework.",
                "Let's try that one again.",
            ],
        ),
        FeedbackTier::new(
            "very-poor",
            13,
            None,
            [
                "That translation is far off.",
                "Start over and go word by word.",
                "Hardly anything matches. Try again.",
                "Did you answer a different sentence?",
            ],
        ),
    ]
}
