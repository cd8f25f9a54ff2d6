//! Domain error types.
//!
//! File I/O and parsing go through `anyhow` with path context; these enums
//! cover the failures callers may want to match on.

use thiserror::Error;

/// Reasons a feedback tier table is rejected.
///
/// A valid table partitions `[0, ∞)`: it starts at zero, each tier begins
/// right after the previous one ends, and only the last tier is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TierTableError {
    /// The table has no tiers at all.
    #[error("tier table is empty")]
    Empty,

    /// The first tier does not cover an error count of zero.
    #[error("first tier '{name}' starts at {min}, expected 0")]
    DoesNotStartAtZero { name: String, min: usize },

    /// A tier's upper bound is below its lower bound.
    #[error("tier '{name}' has an inverted range {min}..={max}")]
    InvertedRange { name: String, min: usize, max: usize },

    /// Error counts between two adjacent tiers are not covered.
    #[error("gap between tier '{previous}' (ends at {end}) and tier '{next}' (starts at {start})")]
    Gap {
        previous: String,
        end: usize,
        next: String,
        start: usize,
    },

    /// Two adjacent tiers cover the same error count.
    #[error("tier '{next}' (starts at {start}) overlaps tier '{previous}' (ends at {end})")]
    Overlap {
        previous: String,
        end: usize,
        next: String,
        start: usize,
    },

    /// An open-ended tier is followed by more tiers.
    #[error("tier '{0}' has no upper bound but is not the last tier")]
    UnboundedNotLast(String),

    /// The last tier stops at a finite count, leaving larger counts uncovered.
    #[error("last tier '{name}' ends at {max}; the last tier must have no upper bound")]
    BoundedLast { name: String, max: usize },

    /// A tier has nothing to say.
    #[error("tier '{0}' has no feedback messages")]
    NoMessages(String),
}

/// Errors from editing the sentence bank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    /// No record carries the requested id.
    #[error("no sentence with id {0}")]
    RecordNotFound(u32),

    /// The largest id in use is already `u32::MAX`.
    #[error("no sentence ids left after {}", u32::MAX)]
    IdExhausted,

    /// A record field was blank after trimming.
    #[error("sentence {id}: {field} text is empty")]
    EmptyText { id: u32, field: &'static str },
}
