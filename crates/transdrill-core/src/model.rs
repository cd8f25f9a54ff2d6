//! Core data model types for transdrill.
//!
//! These types describe the outcome of comparing a learner's sentence with
//! the reference translation, word by word.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a single token relates to the reference sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// Present in both sentences at this alignment position.
    Match,
    /// In the reference, but the learner left it out.
    Missing,
    /// Typed by the learner, but not in the reference.
    Extra,
}

impl Tag {
    /// Two-character prefix used by line-oriented diff output.
    pub fn diff_prefix(self) -> &'static str {
        match self {
            Tag::Match => "  ",
            Tag::Missing => "- ",
            Tag::Extra => "+ ",
        }
    }

    /// Whether this tag counts towards the error count.
    pub fn is_error(self) -> bool {
        !matches!(self, Tag::Match)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Match => write!(f, "match"),
            Tag::Missing => write!(f, "missing"),
            Tag::Extra => write!(f, "extra"),
        }
    }
}

impl FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "match" => Ok(Tag::Match),
            "missing" => Ok(Tag::Missing),
            "extra" => Ok(Tag::Extra),
            other => Err(format!("unknown tag: {other}")),
        }
    }
}

/// One aligned token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentEntry {
    pub tag: Tag,
    pub token: String,
}

impl AlignmentEntry {
    pub fn new(tag: Tag, token: impl Into<String>) -> Self {
        Self {
            tag,
            token: token.into(),
        }
    }
}

/// The full word-level alignment of a candidate against a reference.
///
/// `error_count` is always the number of `Missing` plus `Extra` entries; it is
/// zero exactly when the candidate reproduces the reference token for token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAlignment")]
pub struct AlignmentResult {
    entries: Vec<AlignmentEntry>,
    error_count: usize,
}

/// Serialized form; any stored `error_count` is ignored and recomputed.
#[derive(Deserialize)]
struct RawAlignment {
    entries: Vec<AlignmentEntry>,
}

impl From<RawAlignment> for AlignmentResult {
    fn from(raw: RawAlignment) -> Self {
        Self::from_entries(raw.entries)
    }
}

impl AlignmentResult {
    /// Build a result from entries, deriving the error count.
    pub fn from_entries(entries: Vec<AlignmentEntry>) -> Self {
        let error_count = entries.iter().filter(|e| e.tag.is_error()).count();
        Self {
            entries,
            error_count,
        }
    }

    pub fn entries(&self) -> &[AlignmentEntry] {
        &self.entries
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// `true` when every entry is a match.
    pub fn is_perfect(&self) -> bool {
        self.error_count == 0
    }

    /// Tokens carrying the given tag, in alignment order.
    pub fn tokens_with(&self, tag: Tag) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .filter(move |e| e.tag == tag)
            .map(|e| e.token.as_str())
    }

    /// Number of entries carrying the given tag.
    pub fn count(&self, tag: Tag) -> usize {
        self.entries.iter().filter(|e| e.tag == tag).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl IntoIterator for AlignmentResult {
    type Item = AlignmentEntry;
    type IntoIter = std::vec::IntoIter<AlignmentEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a AlignmentResult {
    type Item = &'a AlignmentEntry;
    type IntoIter = std::slice::Iter<'a, AlignmentEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
