use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("lesson-registry").unwrap();
    cmd.env_remove("LESSON_REGISTRY_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

const EXTRA_PACK: &str = r#"
[[lessons]]
key = "reversals"
title = "Reversal Recognition"
description = "Learn to spot reversals"
question_format = "pictograph"
answer_format = "button"
quiz_description = "reversals"
question_prompt = "Is this a reversal?"

[lessons.options]
num_options = 2
randomize_options = false
"#;

#[test]
fn test_list_prints_builtin_lessons_in_order() {
    let output = cli()
        .args(["--no-user-config", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let keys: Vec<&str> = stdout
        .lines()
        .filter_map(|l| l.split_whitespace().next())
        .collect();

    assert_eq!(
        keys,
        vec![
            "pictograph_to_letter",
            "letter_to_pictograph",
            "valid_next_pictograph",
            "turns",
            "positions",
        ]
    );
}

#[test]
fn test_show_prints_json() {
    cli()
        .args(["--no-user-config", "show", "turns"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"num_options\": 3"))
        .stdout(predicate::str::contains("\"question_format\": \"pictograph\""))
        .stdout(predicate::str::contains("Identify the turn pattern:"));
}

#[test]
fn test_show_unknown_lesson_fails() {
    cli()
        .args(["--no-user-config", "show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Lesson unavailable"));
}

#[test]
fn test_validate_good_pack() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("extra.toml");
    fs::write(&path, EXTRA_PACK).unwrap();

    cli()
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: 6 lessons (1 from packs)"));
}

#[test]
fn test_validate_bad_format_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(
        &path,
        EXTRA_PACK.replace("answer_format = \"button\"", "answer_format = \"slider\""),
    )
    .unwrap();

    cli()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown answer_format 'slider'"));
}

#[test]
fn test_pack_flag_adds_lessons() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("extra.toml");
    fs::write(&path, EXTRA_PACK).unwrap();

    cli()
        .arg("--pack")
        .arg(&path)
        .args(["show", "reversals"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"randomize_options\": false"));
}

#[test]
fn test_rust_log_overrides_log_level_flag() {
    cli()
        .env("RUST_LOG", "debug")
        .args(["--log-level", "warn", "--no-user-config", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Registered lesson: turns"));
}

#[test]
fn test_log_level_flag_used_without_rust_log() {
    cli()
        .args(["--log-level", "warn", "--no-user-config", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Registered lesson").not());
}
