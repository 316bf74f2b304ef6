// tests/integration_test.rs
use std::process::Command;

#[test]
fn test_actions_kit_help() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "actions-kit", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("actions-kit"));
    assert!(stdout.contains("Command-line helpers for GitHub Actions release workflows"));
    assert!(stdout.contains("use-example"));
    assert!(stdout.contains("docs-version"));
    assert!(stdout.contains("draft-release"));
}

#[test]
fn test_actions_kit_version_flag() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "actions-kit", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("actions-kit"));
}

#[test]
fn test_check_version_subcommand() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--bin",
            "actions-kit",
            "--",
            "check-version",
            "--current",
            "v1.9.10",
            "--next",
            "v1.10.0",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("true"));
}

#[test]
fn test_check_version_subcommand_rejects_jump() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--bin",
            "actions-kit",
            "--",
            "check-version",
            "--current",
            "v1.0.0",
            "--next",
            "v3.0.0",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("only increment one number at a time"));
}

#[test]
fn test_check_version_lenient_mode() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--bin",
            "actions-kit",
            "--",
            "check-version",
            "--current",
            "v1.0.0",
            "--next",
            "v3.0.0",
            "--lenient",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("false"));
}
