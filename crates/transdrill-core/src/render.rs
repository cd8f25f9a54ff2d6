//! Plain-text and markdown renderings of an alignment.

use crate::model::{AlignmentResult, Tag};

/// One line: matches as-is, `[-missing]` and `[+extra]` marked inline.
pub fn inline(result: &AlignmentResult) -> String {
    result
        .entries()
        .iter()
        .map(|e| match e.tag {
            Tag::Match => e.token.clone(),
            Tag::Missing => format!("[-{}]", e.token),
            Tag::Extra => format!("[+{}]", e.token),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One token per line with `ndiff`-style prefixes.
pub fn diff(result: &AlignmentResult) -> String {
    result
        .entries()
        .iter()
        .map(|e| format!("{}{}", e.tag.diff_prefix(), e.token))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Markdown: missing words struck through, extra words in bold.
pub fn markdown(result: &AlignmentResult) -> String {
    let mut md = result
        .entries()
        .iter()
        .map(|e| match e.tag {
            Tag::Match => e.token.clone(),
            Tag::Missing => format!("~~{}~~", e.token),
            Tag::Extra => format!("**{}**", e.token),
        })
        .collect::<Vec<_>>()
        .join(" ");

    md.push_str(&format!(
        "\n\n| Matched | Missing | Extra | Errors |\n|---|---|---|---|\n| {} | {} | {} | {} |\n",
        result.count(Tag::Match),
        result.count(Tag::Missing),
        result.count(Tag::Extra),
        result.error_count()
    ));
    md
}
