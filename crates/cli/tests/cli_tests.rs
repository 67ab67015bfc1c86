//! End-to-end tests for the keyroute binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn keyroute() -> Command {
    Command::cargo_bin("keyroute").expect("binary builds")
}

#[test]
fn commands_lists_library_in_table_form() {
    keyroute()
        .args(["commands", "--owner", "ApplicationCommands"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Copy"))
        .stdout(predicate::str::contains("Ctrl+C, Ctrl+Insert"))
        .stdout(predicate::str::contains("21 command(s)"));
}

#[test]
fn commands_json_output_is_parseable() {
    let output = keyroute()
        .args(["--output", "json", "commands", "--with-gestures"])
        .output()
        .expect("runs");
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid json");
    let entries = parsed.as_array().expect("array");
    assert!(entries.iter().all(|e| !e["gestures"].as_array().unwrap().is_empty()));
    assert!(entries.iter().any(|e| e["token"] == "Copy"));
}

#[test]
fn convert_canonicalizes_gestures() {
    keyroute()
        .args(["convert", "shift+ctrl+f14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gesture: Ctrl+Shift+F14"));
}

#[test]
fn convert_resolves_command_tokens() {
    keyroute()
        .args(["convert", "Cut"])
        .assert()
        .success()
        .stdout(predicate::str::contains("command: Cut"));
}

#[test]
fn convert_rejects_garbage_with_invalid_input_exit_code() {
    keyroute()
        .args(["convert", "Ctrl+NoSuchKey"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown key name"));
}

#[test]
fn simulate_verifies_matching_scenario() {
    let mut script = tempfile::NamedTempFile::new().expect("temp file");
    script
        .write_all(
            br#"{
                "classes": [{"name": "TextBox", "parent": "Control"}],
                "elements": [{"name": "editor", "class": "TextBox", "focus": true}],
                "class_bindings": [{"class": "Control", "command": "Copy"}],
                "inputs": ["Ctrl+C", "Ctrl+V"],
                "expect": ["Copy on editor"]
            }"#,
        )
        .expect("write scenario");

    keyroute()
        .arg("simulate")
        .arg(script.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: 2 input(s), 1 response(s)"));
}

#[test]
fn simulate_fails_on_mismatch_with_scenario_exit_code() {
    let mut script = tempfile::NamedTempFile::new().expect("temp file");
    script
        .write_all(
            br#"{
                "elements": [{"name": "editor", "class": "TextBox"}],
                "class_bindings": [{"class": "TextBox", "command": "Paste"}],
                "inputs": ["Ctrl+V"],
                "expect": ["Cut on editor"]
            }"#,
        )
        .expect("write scenario");

    keyroute()
        .arg("simulate")
        .arg(script.path())
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("response mismatch"));
}

#[test]
fn simulate_missing_file_maps_to_io_exit_code() {
    keyroute()
        .args(["simulate", "/no/such/scenario.json"])
        .assert()
        .failure()
        .code(4);
}
