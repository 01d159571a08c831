use predicates::prelude::*;
use std::process::Command;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_webpdf")))
}

fn stdout_json(args: &[&str]) -> serde_json::Value {
    let assert = cmd().args(args).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    serde_json::from_str(&output).unwrap()
}

#[test]
fn test_prints_config_with_defaults() {
    let config = stdout_json(&["http://x", "out.pdf"]);

    assert_eq!(config["url"], "http://x");
    assert_eq!(config["media"], "screen");
    assert_eq!(config["networkTimeout"], 1000);
    assert_eq!(config["args"], true);
    assert_eq!(config["pdf"]["path"], "out.pdf");
    assert_eq!(config["pdf"]["format"], "A4");
    assert_eq!(config["pdf"]["printBackground"], true);
    assert_eq!(config["pdf"]["scale"], 1);
    assert_eq!(
        config["pdf"]["margin"],
        serde_json::json!({ "top": "0", "right": "0", "bottom": "0", "left": "0" })
    );
    assert!(config["pdf"].get("width").is_none());
    assert!(config["pdf"].get("height").is_none());
}

#[test]
fn test_supplied_flags_reach_config() {
    let config = stdout_json(&[
        "-m", "print",
        "-l", "true",
        "--header-footer", "false",
        "-s", "3",
        "--width", "210mm",
        "http://x",
        "out.pdf",
    ]);

    assert_eq!(config["media"], "print");
    assert_eq!(config["pdf"]["landscape"], true);
    assert_eq!(config["pdf"]["displayHeaderFooter"], false);
    assert_eq!(config["pdf"]["scale"], 3);
    assert_eq!(config["pdf"]["width"], "210mm");
}

#[test]
fn test_uppercase_boolean_is_rejected() {
    cmd()
        .args(["--header-footer", "TRUE", "http://x", "out.pdf"])
        .assert()
        .failure();
}

#[test]
fn test_invalid_media_reports_possible_values() {
    cmd()
        .args(["--media", "tv", "http://x", "out.pdf"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--media - possible values: print, screen"));
}

#[test]
fn test_every_error_reported_once() {
    let assert = cmd()
        .args(["--scale", "abc", "--media", "tv", "http://x", "out.pdf"])
        .assert()
        .code(1);
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    let lines: Vec<&str> = stderr.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("--media - possible values: print, screen"));
    assert!(lines[1].ends_with("--scale - pattern: ^[0-9]+$"));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    cmd()
        .args(["--bogus", "http://x", "out.pdf"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn test_help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Arguments:"))
        .stdout(predicate::str::contains("Additional information:"))
        .stdout(predicate::str::contains("Output usage information."));
}

#[test]
fn test_short_h_means_help() {
    cmd()
        .args(["-h", "http://x", "out.pdf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: webpdf"));
}

#[test]
fn test_no_arguments_shows_help() {
    cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Arguments:"));
}

#[test]
fn test_version_flag() {
    cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
