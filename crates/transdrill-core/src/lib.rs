//! transdrill-core — Sentence alignment, feedback tiers, and sentence bank.
//!
//! This crate holds everything the `transdrill` CLI builds on: the word-level
//! aligner, the validated feedback tier table, the JSON sentence bank, and
//! configuration loading.

pub mod align;
pub mod bank;
pub mod config;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod model;
pub mod render;

pub use align::{align, compare, tokenize};
pub use engine::{CheckEngine, CheckOutcome};
pub use error::{BankError, TierTableError};
pub use feedback::{select_feedback, FeedbackTier, TierTable};
pub use model::{AlignmentEntry, AlignmentResult, Tag};
