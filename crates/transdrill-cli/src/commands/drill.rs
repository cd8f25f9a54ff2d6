//! The `transdrill drill` command: an interactive practice loop on stdin.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::Rng;

use transdrill_core::bank::{SentenceBank, SentenceRecord};
use transdrill_core::config::load_config_from;
use transdrill_core::{render, CheckEngine, Tag};

use super::{bank_path, make_rng};

const HELP: &str = "Type your translation and press Enter.
  :n, :next   skip to another sentence
  :h, :help   show this help
  :q, :quit   stop practising";

/// One line of learner input.
#[derive(Debug, Clone, PartialEq)]
enum DrillInput {
    Answer(String),
    Next,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_drill_input(input: &str) -> DrillInput {
    let input = input.trim();

    if input.is_empty() {
        return DrillInput::Empty;
    }

    if let Some(cmd) = input.strip_prefix(':') {
        match cmd {
            "q" | "quit" => DrillInput::Quit,
            "n" | "next" => DrillInput::Next,
            "h" | "help" => DrillInput::Help,
            _ => DrillInput::Unknown(input.to_string()),
        }
    } else {
        DrillInput::Answer(input.to_string())
    }
}

pub fn execute(
    bank_flag: Option<PathBuf>,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let path = bank_path(bank_flag, config.bank);
    let bank = SentenceBank::load(&path)?;
    anyhow::ensure!(
        !bank.is_empty(),
        "sentence bank has no sentences: {}",
        path.display()
    );

    let engine = CheckEngine::new(config.tiers);
    let mut rng = make_rng(seed);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&bank, &engine, &mut rng, stdin.lock(), stdout.lock())
}

fn run_session<R: Rng, I: BufRead, O: Write>(
    bank: &SentenceBank,
    engine: &CheckEngine,
    rng: &mut R,
    input: I,
    mut out: O,
) -> Result<()> {
    let mut record = pick(bank, rng)?;
    let mut checked = 0usize;
    let mut perfect = 0usize;

    writeln!(out, "{HELP}")?;
    show_prompt(&mut out, record)?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        match parse_drill_input(&line) {
            DrillInput::Quit => break,
            DrillInput::Next => {
                record = pick(bank, rng)?;
                show_prompt(&mut out, record)?;
                continue;
            }
            DrillInput::Help => writeln!(out, "{HELP}")?,
            DrillInput::Unknown(cmd) => writeln!(out, "Unknown command: {cmd} (try :help)")?,
            DrillInput::Empty => {}
            DrillInput::Answer(answer) => {
                let outcome = engine.check_with_rng(&record.target, &answer, rng);
                let alignment = &outcome.alignment;
                checked += 1;
                if alignment.is_perfect() {
                    perfect += 1;
                }

                writeln!(out, "{}", render::inline(alignment))?;
                writeln!(
                    out,
                    "Errors: {} (missing {}, extra {})",
                    alignment.error_count(),
                    alignment.count(Tag::Missing),
                    alignment.count(Tag::Extra)
                )?;
                if let Some(feedback) = &outcome.feedback {
                    writeln!(out, "{feedback}")?;
                }
            }
        }
        write!(out, "> ")?;
        out.flush()?;
    }

    writeln!(out)?;
    writeln!(out, "Checked {checked} answer(s), {perfect} perfect.")?;
    Ok(())
}

fn pick<'a, R: Rng>(bank: &'a SentenceBank, rng: &mut R) -> Result<&'a SentenceRecord> {
    bank.random(rng)
        .ok_or_else(|| anyhow::anyhow!("sentence bank is empty"))
}

fn show_prompt<O: Write>(out: &mut O, record: &SentenceRecord) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "[{}] {}", record.id, record.source)?;
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn one_sentence_bank() -> SentenceBank {
        SentenceBank::from_json_str(r#"[{"id": 1, "source": "我愛你", "target": "I love you"}]"#)
            .unwrap()
    }

    fn run(input: &str) -> String {
        let bank = one_sentence_bank();
        let engine = CheckEngine::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut out = Vec::new();
        run_session(&bank, &engine, &mut rng, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_drill_input(":q"), DrillInput::Quit);
        assert_eq!(parse_drill_input(" :quit "), DrillInput::Quit);
        assert_eq!(parse_drill_input(":n"), DrillInput::Next);
        assert_eq!(parse_drill_input(":help"), DrillInput::Help);
        assert_eq!(parse_drill_input("   "), DrillInput::Empty);
        assert!(matches!(parse_drill_input(":x"), DrillInput::Unknown(_)));
    }

    #[test]
    fn parse_answer_is_trimmed() {
        assert_eq!(
            parse_drill_input("  I love you \n"),
            DrillInput::Answer("I love you".into())
        );
    }

    #[test]
    fn session_checks_answers() {
        let out = run("I like you\nI love you\n:q\n");
        assert!(out.contains("[1] 我愛你"));
        assert!(out.contains("I [-love] [+like] you"));
        assert!(out.contains("Errors: 2 (missing 1, extra 1)"));
        assert!(out.contains("Errors: 0 (missing 0, extra 0)"));
        assert!(out.contains("Checked 2 answer(s), 1 perfect."));
    }

    #[test]
    fn session_ends_at_eof() {
        let out = run("I love you\n");
        assert!(out.contains("Checked 1 answer(s), 1 perfect."));
    }

    #[test]
    fn quit_stops_before_remaining_lines() {
        let out = run(":q\nI love you\n");
        assert!(out.contains("Checked 0 answer(s), 0 perfect."));
    }

    #[test]
    fn next_shows_another_prompt() {
        let out = run(":n\n:q\n");
        assert_eq!(out.matches("[1] 我愛你").count(), 2);
    }

    #[test]
    fn unknown_command_is_reported() {
        let out = run(":zzz\n:q\n");
        assert!(out.contains("Unknown command: :zzz"));
    }
}
