//! Word-level alignment of a learner's sentence against the reference.
//!
//! Both sentences are treated as streams of atomic tokens. The alignment
//! keeps a longest common subsequence as `Match` entries and reports the
//! rest as `Missing` (reference only) or `Extra` (candidate only), in the
//! order a line-oriented diff would print them.

use crate::model::{AlignmentEntry, AlignmentResult, Tag};

/// Split a sentence into tokens on runs of whitespace.
pub fn tokenize(sentence: &str) -> Vec<&str> {
    sentence.split_whitespace().collect()
}

/// Tokenize both sentences and align them.
pub fn compare(reference: &str, candidate: &str) -> AlignmentResult {
    align(&tokenize(reference), &tokenize(candidate))
}

/// Align two token sequences.
///
/// Tie-breaking when several alignments share the same number of matches:
/// - equal tokens at the current position are matched right away, so runs
///   line up as early as possible;
/// - otherwise a `Missing` entry comes before an `Extra` entry whenever both
///   keep the alignment optimal.
///
/// Only which tokens are flagged depends on this policy; the error count
/// depends on the common subsequence length alone.
pub fn align<R, C>(reference: &[R], candidate: &[C]) -> AlignmentResult
where
    R: AsRef<str>,
    C: AsRef<str>,
{
    let a: Vec<&str> = reference.iter().map(AsRef::as_ref).collect();
    let b: Vec<&str> = candidate.iter().map(AsRef::as_ref).collect();
    let (n, m) = (a.len(), b.len());

    // lcs[i][j] = length of the longest common subsequence of a[i..] and b[j..]
    let width = m + 1;
    let mut lcs = vec![0usize; (n + 1) * width];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i * width + j] = if a[i] == b[j] {
                lcs[(i + 1) * width + j + 1] + 1
            } else {
                lcs[(i + 1) * width + j].max(lcs[i * width + j + 1])
            };
        }
    }

    let mut entries = Vec::with_capacity(n + m - lcs[0]);
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if a[i] == b[j] {
            entries.push(AlignmentEntry::new(Tag::Match, a[i]));
            i += 1;
            j += 1;
        } else if lcs[(i + 1) * width + j] >= lcs[i * width + j + 1] {
            entries.push(AlignmentEntry::new(Tag::Missing, a[i]));
            i += 1;
        } else {
            entries.push(AlignmentEntry::new(Tag::Extra, b[j]));
            j += 1;
        }
    }
    entries.extend(a[i..].iter().map(|t| AlignmentEntry::new(Tag::Missing, *t)));
    entries.extend(b[j..].iter().map(|t| AlignmentEntry::new(Tag::Extra, *t)));

    let result = AlignmentResult::from_entries(entries);
    tracing::trace!(
        reference_tokens = n,
        candidate_tokens = m,
        matched = lcs[0],
        errors = result.error_count(),
        "aligned sentences"
    );
    result
}
