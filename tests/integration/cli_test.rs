//! CLI behaviour through the built binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// The binary with config and cache directories pointed into `home`.
fn cyberquest(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cyberquest").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_CACHE_HOME", home.path().join("cache"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    cyberquest(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("round"))
        .stdout(predicate::str::contains("check-password"))
        .stdout(predicate::str::contains("script"));
}

#[test]
fn round_json_is_reproducible_with_seed() {
    let home = TempDir::new().unwrap();
    let first = cyberquest(&home)
        .args(["round", "phishing", "--json", "--seed", "7"])
        .output()
        .unwrap();
    let second = cyberquest(&home)
        .args(["round", "phishing", "--json", "--seed", "7"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let value: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    let emails = value.as_array().unwrap();
    assert_eq!(emails.len(), 5);
    assert_eq!(
        emails.iter().filter(|e| e["is_phishing"] == true).count(),
        1
    );
}

#[test]
fn round_table_prints_five_rows() {
    let home = TempDir::new().unwrap();
    cyberquest(&home)
        .args(["round", "password", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USERNAME"))
        .stdout(predicate::function(|out: &str| {
            out.lines().filter(|l| l.starts_with(char::is_numeric)).count() == 5
        }));
}

#[test]
fn unknown_challenge_fails() {
    let home = TempDir::new().unwrap();
    cyberquest(&home)
        .args(["round", "ransomware"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn check_password_json_reports_feedback() {
    let home = TempDir::new().unwrap();
    cyberquest(&home)
        .args(["check-password", "qwerty", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"strength\": \"weak\""))
        .stdout(predicate::str::contains("\"is_valid\": false"));
}

#[test]
fn check_password_accepts_strong_password() {
    let home = TempDir::new().unwrap();
    cyberquest(&home)
        .args(["check-password", "Blue-Lantern#42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Meets all requirements"));
}

#[test]
fn tips_prints_every_tip() {
    let home = TempDir::new().unwrap();
    cyberquest(&home)
        .args(["tips", "phishing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Phishing Red Flags"))
        .stdout(predicate::function(|out: &str| out.matches("  • ").count() == 6));
}

#[test]
fn config_init_then_show_round_trips() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("custom.toml");
    let path_arg = path.to_str().unwrap();

    cyberquest(&home)
        .args(["config", "init", "--config", path_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(fs::read_to_string(&path).unwrap().contains("typing_speed_ms = 30"));

    cyberquest(&home)
        .args(["config", "init", "--config", path_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    cyberquest(&home)
        .args(["config", "show", "--config", path_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("[player]"))
        .stdout(predicate::str::contains("points_per_level = 100"));
}

#[test]
fn config_path_honours_override() {
    let home = TempDir::new().unwrap();
    cyberquest(&home)
        .args(["config", "path", "--config", "/tmp/elsewhere.toml"])
        .assert()
        .success()
        .stdout("/tmp/elsewhere.toml\n");
}

#[test]
fn broken_config_is_an_error() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("bad.toml");
    fs::write(&path, "[player\ntyping_speed_ms = ").unwrap();
    cyberquest(&home)
        .args(["tips", "insider", "--config", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.toml"));
}

#[test]
fn script_prints_lines_when_piped() {
    let home = TempDir::new().unwrap();
    let script = home.path().join("boot.txt");
    fs::write(&script, "Booting\n\nReady\n").unwrap();
    cyberquest(&home)
        .args(["script", script.to_str().unwrap(), "--speed", "0"])
        .assert()
        .success()
        .stdout("Booting\nReady\n");
}

#[test]
fn interactive_script_reads_answer_from_stdin() {
    let home = TempDir::new().unwrap();
    let script = home.path().join("ask.txt");
    fs::write(&script, "Name?\n").unwrap();
    cyberquest(&home)
        .args(["script", script.to_str().unwrap(), "--speed", "0", "--interactive"])
        .write_stdin("\nneo\n")
        .assert()
        .success()
        .stdout("Name?\n> > ");
}

#[test]
fn missing_script_fails_with_context() {
    let home = TempDir::new().unwrap();
    cyberquest(&home)
        .args(["script", "/nonexistent/file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"));
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    cyberquest(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cyberquest"));
}
