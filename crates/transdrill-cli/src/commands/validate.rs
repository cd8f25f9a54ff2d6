//! The `transdrill validate` command.

use std::path::PathBuf;

use anyhow::Result;

use transdrill_core::bank::SentenceBank;
use transdrill_core::config::load_config_from;

use super::bank_path;

pub fn execute(config_path: Option<PathBuf>, bank_flag: Option<PathBuf>) -> Result<()> {
    // Loading the config validates the tier table.
    let config = load_config_from(config_path.as_deref())?;

    let ranges: Vec<String> = config
        .tiers
        .tiers()
        .iter()
        .map(|t| match t.max {
            Some(max) if max == t.min => format!("{}={}", t.name, t.min),
            Some(max) => format!("{}={}-{}", t.name, t.min, max),
            None => format!("{}={}+", t.name, t.min),
        })
        .collect();
    println!(
        "Feedback tiers: {} ({})",
        config.tiers.tiers().len(),
        ranges.join(", ")
    );

    let path = bank_path(bank_flag, config.bank);
    let bank = SentenceBank::load(&path)?;
    println!("Sentence bank: {} ({} sentences)", path.display(), bank.len());

    let warnings = bank.validate();
    for w in &warnings {
        let prefix = w
            .record_id
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("All checks passed.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
