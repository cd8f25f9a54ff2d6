//! The `transdrill check` command.

use std::path::PathBuf;

use anyhow::Result;

use transdrill_core::config::load_config_from;
use transdrill_core::{render, CheckEngine, CheckOutcome, Tag};

use super::make_rng;

pub fn execute(
    reference: String,
    candidate: String,
    format: String,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let engine = CheckEngine::new(config.tiers);
    let mut rng = make_rng(seed);

    let outcome = engine.check_with_rng(&reference, &candidate, &mut rng);

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        "markdown" | "md" => {
            print!("{}", render::markdown(&outcome.alignment));
            if let Some(feedback) = &outcome.feedback {
                println!("\n**Feedback:** {feedback}");
            }
        }
        "diff" => {
            println!("{}", render::diff(&outcome.alignment));
            print_summary(&outcome);
        }
        "text" => {
            println!("{}", render::inline(&outcome.alignment));
            print_summary(&outcome);
        }
        other => anyhow::bail!("unknown format: {other} (expected text, diff, markdown, json)"),
    }

    Ok(())
}

/// Error count, tier, and feedback lines shared by the text formats.
pub fn print_summary(outcome: &CheckOutcome) {
    let alignment = &outcome.alignment;
    println!(
        "Errors: {} (missing {}, extra {})",
        alignment.error_count(),
        alignment.count(Tag::Missing),
        alignment.count(Tag::Extra)
    );
    if let Some(tier) = &outcome.tier {
        println!("Tier: {tier}");
    }
    match &outcome.feedback {
        Some(feedback) => println!("Feedback: {feedback}"),
        None => println!("Feedback: (none available)"),
    }
}
