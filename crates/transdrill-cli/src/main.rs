//! transdrill CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

use commands::bank::BankAction;

#[derive(Parser)]
#[command(
    name = "transdrill",
    version,
    about = "Translation drill with word-level feedback"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare one answer against a reference sentence
    Check {
        /// The correct sentence
        #[arg(long)]
        reference: String,

        /// The sentence to check
        #[arg(long)]
        candidate: String,

        /// Output format: text, diff, markdown, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Seed for feedback selection
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Practise translating sentences from the bank
    Drill {
        /// Sentence bank JSON (defaults to the configured bank)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Seed for sentence and feedback selection
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List and edit the sentence bank
    Bank {
        /// Sentence bank JSON (defaults to the configured bank)
        #[arg(long, global = true)]
        bank: Option<PathBuf>,

        /// Config file path
        #[arg(long, global = true)]
        config: Option<PathBuf>,

        #[command(subcommand)]
        action: BankAction,
    },

    /// Validate the feedback tiers and the sentence bank
    Validate {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Sentence bank JSON (defaults to the configured bank)
        #[arg(long)]
        bank: Option<PathBuf>,
    },

    /// Create starter config and example sentence bank
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("transdrill=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            reference,
            candidate,
            format,
            seed,
            config,
        } => commands::check::execute(reference, candidate, format, seed, config),
        Commands::Drill { bank, seed, config } => commands::drill::execute(bank, seed, config),
        Commands::Bank {
            bank,
            config,
            action,
        } => commands::bank::execute(action, bank, config),
        Commands::Validate { config, bank } => commands::validate::execute(config, bank),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
