//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from any config in the working directory or `$HOME`.
fn transdrill(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("transdrill").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("TRANSDRILL_BANK")
        .env_remove("RUST_LOG");
    cmd
}

const BANK: &str = r#"[
    {"id": 1, "english": "I love you", "chinese": "我愛你"}
]"#;

fn write_bank(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("translations.json");
    std::fs::write(&path, BANK).unwrap();
    path
}

#[test]
fn check_exact_match() {
    let dir = TempDir::new().unwrap();
    transdrill(&dir)
        .args(["check", "--reference", "I love you", "--candidate", "I love you"])
        .assert()
        .success()
        .stdout(predicate::str::contains("I love you"))
        .stdout(predicate::str::contains("Errors: 0"))
        .stdout(predicate::str::contains("Tier: perfect"));
}

#[test]
fn check_substitution() {
    let dir = TempDir::new().unwrap();
    transdrill(&dir)
        .args(["check", "--reference", "I love you", "--candidate", "I like you"])
        .assert()
        .success()
        .stdout(predicate::str::contains("I [-love] [+like] you"))
        .stdout(predicate::str::contains("Errors: 2 (missing 1, extra 1)"))
        .stdout(predicate::str::contains("Tier: good"));
}

#[test]
fn check_diff_format() {
    let dir = TempDir::new().unwrap();
    transdrill(&dir)
        .args([
            "check",
            "--reference",
            "a b c d e",
            "--candidate",
            "a b",
            "--format",
            "diff",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("- c\n- d\n- e"))
        .stdout(predicate::str::contains("Errors: 3"));
}

#[test]
fn check_json_format() {
    let dir = TempDir::new().unwrap();
    let output = transdrill(&dir)
        .args([
            "check",
            "--reference",
            "",
            "--candidate",
            "extra word",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["alignment"]["error_count"], 2);
    assert_eq!(json["alignment"]["entries"][0]["tag"], "extra");
    assert_eq!(json["tier"], "good");
}

#[test]
fn check_seed_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let run = || {
        transdrill(&dir)
            .args([
                "check",
                "--reference",
                "one two three",
                "--candidate",
                "one",
                "--seed",
                "11",
            ])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn check_unknown_format_fails() {
    let dir = TempDir::new().unwrap();
    transdrill(&dir)
        .args(["check", "--reference", "a", "--candidate", "a", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn check_uses_custom_tiers() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(
        &config,
        r#"
[[tiers]]
name = "clean"
min = 0
max = 0
messages = ["全對了"]

[[tiers]]
name = "retry"
min = 1
messages = ["再試一次"]
"#,
    )
    .unwrap();

    transdrill(&dir)
        .args(["check", "--reference", "a b", "--candidate", "a"])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tier: retry"))
        .stdout(predicate::str::contains("Feedback: 再試一次"));
}

#[test]
fn invalid_tier_table_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.toml");
    std::fs::write(
        &config,
        r#"
[[tiers]]
name = "low"
min = 0
max = 3
messages = ["ok"]
"#,
    )
    .unwrap();

    transdrill(&dir)
        .args(["check", "--reference", "a", "--candidate", "b"])
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("last tier"));
}

#[test]
fn drill_session() {
    let dir = TempDir::new().unwrap();
    write_bank(&dir);

    transdrill(&dir)
        .args(["drill", "--seed", "5"])
        .write_stdin("I like you\n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] 我愛你"))
        .stdout(predicate::str::contains("I [-love] [+like] you"))
        .stdout(predicate::str::contains("Checked 1 answer(s), 0 perfect."));
}

#[test]
fn drill_missing_bank_fails() {
    let dir = TempDir::new().unwrap();
    transdrill(&dir)
        .args(["drill", "--bank", "nope.json"])
        .write_stdin(":q\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.json"));
}

#[test]
fn drill_empty_bank_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("translations.json"), "[]").unwrap();
    transdrill(&dir)
        .arg("drill")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no sentences"));
}

#[test]
fn bank_add_list_update_delete() {
    let dir = TempDir::new().unwrap();
    let bank = write_bank(&dir);

    transdrill(&dir)
        .args(["bank", "add", "--source", "早安", "--target", "Good morning"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added sentence 2"));

    transdrill(&dir)
        .args(["bank", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Good morning"))
        .stdout(predicate::str::contains("2 sentence(s)"));

    transdrill(&dir)
        .args(["bank", "update", "2", "--source", "晚安", "--target", "Good night"])
        .assert()
        .success();

    transdrill(&dir)
        .args(["bank", "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Target: Good night"));

    transdrill(&dir)
        .args(["bank", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted sentence 1: I love you"));

    let saved = std::fs::read_to_string(&bank).unwrap();
    assert!(!saved.contains("I love you"));
    assert!(saved.contains("\"target\": \"Good night\""));
}

#[test]
fn bank_add_creates_new_file() {
    let dir = TempDir::new().unwrap();
    transdrill(&dir)
        .args(["bank", "add", "--bank", "fresh.json", "--source", "謝謝", "--target", "Thanks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added sentence 1"));
    assert!(dir.path().join("fresh.json").exists());
}

#[test]
fn bank_delete_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    write_bank(&dir);
    transdrill(&dir)
        .args(["bank", "delete", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no sentence with id 42"));
}

#[test]
fn validate_reports_bank_warnings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("translations.json"),
        r#"[{"id": 1, "source": "a", "target": "b"}, {"id": 1, "source": "c", "target": " "}]"#,
    )
    .unwrap();

    transdrill(&dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Feedback tiers: 6"))
        .stdout(predicate::str::contains("duplicate sentence ID: 1"))
        .stdout(predicate::str::contains("target sentence is empty"))
        .stdout(predicate::str::contains("warning(s) found"));
}

#[test]
fn init_creates_files_that_validate() {
    let dir = TempDir::new().unwrap();

    transdrill(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created transdrill.toml"))
        .stdout(predicate::str::contains("Created translations.json"));

    assert!(dir.path().join("transdrill.toml").exists());
    assert!(dir.path().join("translations.json").exists());

    transdrill(&dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("very-poor=13+"))
        .stdout(predicate::str::contains("3 sentences"))
        .stdout(predicate::str::contains("All checks passed."));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    transdrill(&dir).arg("init").assert().success();

    transdrill(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    transdrill(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Translation drill with word-level feedback"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    transdrill(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("transdrill"));
}
