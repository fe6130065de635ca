use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const GREETING: &str = "Hello! I'm your exercise health assistant. How can I help you today?";

fn fitness_chat() -> Command {
    let mut cmd = Command::cargo_bin("fitness-chat-cli").unwrap();
    cmd.env_remove("FITNESS_CHAT_DELAY_MS")
        .env_remove("FITNESS_CHAT_PROMPT");
    cmd
}

#[test]
fn one_shot_input_prints_matching_reply() {
    fitness_chat()
        .args(["--no-delay", "--input", "I am a beginner, where do I start?"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("For beginners"));
}

#[test]
fn chat_subcommand_accepts_input() {
    fitness_chat()
        .args(["chat", "--input", "What should I eat before a workout?", "--no-delay"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("A healthy diet"));
}

#[test]
fn delay_can_come_from_env() {
    fitness_chat()
        .env("FITNESS_CHAT_DELAY_MS", "0")
        .args(["--input", "Tell me something about fitness"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Exercise can help"));
}

#[test]
fn replay_uses_last_user_message() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("history.json");
    fs::write(
        &file,
        r#"[
            {"text": "What should I eat?", "sender": "user"},
            {"text": "Eat well.", "sender": "ai"},
            {"text": "How often should I work out?", "sender": "user"},
            {"text": "Tell me something about fitness", "sender": "assistant"}
        ]"#,
    )
    .unwrap();

    fitness_chat()
        .args(["replay", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("The appropriate exercise frequency"));
}

#[test]
fn replay_without_user_messages_greets() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("empty.json");
    fs::write(&file, "[]").unwrap();

    fitness_chat()
        .args(["replay", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(GREETING));
}

#[test]
fn replay_rejects_malformed_history() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("bad.json");
    fs::write(&file, r#"[{"text": "hi", "sender": "robot"}]"#).unwrap();

    fitness_chat()
        .args(["replay", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn replay_missing_file_fails() {
    let dir = tempdir().unwrap();

    fitness_chat()
        .args(["replay", "--file"])
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to replay"));
}

#[test]
fn interactive_session_reads_stdin_until_quit() {
    fitness_chat()
        .arg("--no-delay")
        .write_stdin("\nHow often?\n/history\n/quit\nWhat should I eat?\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(GREETING))
        .stdout(predicate::str::contains("The appropriate exercise frequency"))
        .stdout(predicate::str::contains("[user] How often?"))
        .stdout(predicate::str::contains("A healthy diet").not());
}

#[test]
fn interactive_session_ends_on_eof() {
    fitness_chat()
        .arg("--no-delay")
        .write_stdin("Can you give me a plan?\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Based on your BMI"));
}
