//! The `transdrill bank` commands.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Subcommand;

use transdrill_core::bank::SentenceBank;
use transdrill_core::config::load_config_from;

use super::bank_path;

#[derive(Subcommand)]
pub enum BankAction {
    /// List every sentence
    List,

    /// Show one sentence
    Show {
        /// Sentence ID
        id: u32,
    },

    /// Add a sentence
    Add {
        /// Prompt sentence shown to the learner
        #[arg(long)]
        source: String,

        /// Reference translation
        #[arg(long)]
        target: String,
    },

    /// Replace the text of a sentence
    Update {
        /// Sentence ID
        id: u32,

        /// New prompt sentence
        #[arg(long)]
        source: String,

        /// New reference translation
        #[arg(long)]
        target: String,
    },

    /// Delete a sentence
    Delete {
        /// Sentence ID
        id: u32,
    },
}

pub fn execute(
    action: BankAction,
    bank_flag: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let path = bank_path(bank_flag, config.bank);

    match action {
        BankAction::List => {
            let bank = SentenceBank::load(&path)?;
            print_table(&bank);
            println!("{} sentence(s)", bank.len());
        }
        BankAction::Show { id } => {
            let bank = SentenceBank::load(&path)?;
            let Some(record) = bank.get(id) else {
                anyhow::bail!("no sentence with id {id} in {}", path.display());
            };
            println!("ID:     {}", record.id);
            println!("Source: {}", record.source);
            println!("Target: {}", record.target);
        }
        BankAction::Add { source, target } => {
            let mut bank = load_or_new(&path)?;
            let id = bank.add(&source, &target)?;
            bank.save(&path)?;
            println!("Added sentence {id}");
        }
        BankAction::Update { id, source, target } => {
            let mut bank = SentenceBank::load(&path)?;
            bank.update(id, &source, &target)?;
            bank.save(&path)?;
            println!("Updated sentence {id}");
        }
        BankAction::Delete { id } => {
            let mut bank = SentenceBank::load(&path)?;
            let removed = bank.delete(id)?;
            bank.save(&path)?;
            println!("Deleted sentence {id}: {}", removed.target);
        }
    }

    Ok(())
}

/// Adding to a bank that does not exist yet starts a new one.
fn load_or_new(path: &Path) -> Result<SentenceBank> {
    if path.exists() {
        SentenceBank::load(path)
    } else {
        tracing::info!(path = %path.display(), "creating new sentence bank");
        Ok(SentenceBank::default())
    }
}

fn print_table(bank: &SentenceBank) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["ID", "Source", "Target"]);

    for record in bank.records() {
        table.add_row(vec![
            Cell::new(record.id),
            Cell::new(&record.source),
            Cell::new(&record.target),
        ]);
    }

    println!("{table}");
}
