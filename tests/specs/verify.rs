// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavior of `pinrex verify`.

use crate::prelude::*;

#[test]
fn exact_patterns_pass() {
    let ws = Workspace::new();
    ws.codes(100..=109).patterns(&["^10[0-9]"]);

    ws.cmd()
        .args(["verify", "-i", "codes.json", "-p", "patterns.json", "--width", "3"])
        .assert()
        .success()
        .stdout(predicates::str::starts_with("verify: PASS"))
        .stdout(predicates::str::contains("matched: 10"));
}

#[test]
fn false_positives_fail_with_samples() {
    let ws = Workspace::new();
    ws.codes(100..=105).patterns(&["^10[0-9]"]);

    ws.cmd()
        .args(["verify", "-i", "codes.json", "-p", "patterns.json", "--width", "3"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("verify: FAIL"))
        .stdout(predicates::str::contains("false positives: 4"))
        .stdout(predicates::str::contains("106, 107, 108, 109"));
}

#[test]
fn missing_codes_fail() {
    let ws = Workspace::new();
    ws.codes(100..=109).patterns(&["^10[0-4]"]);

    ws.cmd()
        .args(["verify", "-i", "codes.json", "-p", "patterns.json", "--width", "3"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("missing: 5"));
}

#[test]
fn json_report() {
    let ws = Workspace::new();
    ws.codes(100..=105).patterns(&["^10[0-9]"]);

    let output = ws
        .cmd()
        .args([
            "verify", "-i", "codes.json", "-p", "patterns.json", "--width", "3", "-f", "json",
        ])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["passed"], false);
    assert_eq!(report["matched"], 10);
    assert_eq!(report["false_positives"]["count"], 4);
    assert_eq!(report["false_positives"]["samples"][0], "106");
}

#[test]
fn generated_patterns_verify_at_default_width() {
    let ws = Workspace::new();
    ws.codes((0..2_000u64).map(|i| 100_000 + i * 431));

    ws.cmd()
        .args(["generate", "-i", "codes.json", "-l", "200", "-o", "patterns.json"])
        .assert()
        .success();

    ws.cmd()
        .args(["verify", "-i", "codes.json", "-p", "patterns.json", "--threads", "2"])
        .assert()
        .success()
        .stdout(predicates::str::contains("domain: 100000..=999999 (900000 values)"));
}

#[test]
fn single_regex_document_is_accepted() {
    let ws = Workspace::new();
    ws.codes(100..=109)
        .file("patterns.json", r#"{"regex": "^10[0-9]"}"#);

    ws.cmd()
        .args(["verify", "-i", "codes.json", "-p", "patterns.json", "--width", "3"])
        .assert()
        .success();
}

#[test]
fn uncompilable_pattern_exits_2() {
    let ws = Workspace::new();
    ws.codes([100]).patterns(&["^100", "^1(0"]);

    ws.cmd()
        .args(["verify", "-i", "codes.json", "-p", "patterns.json", "--width", "3"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("^1(0"));
}

#[test]
fn no_color_output_has_no_escapes() {
    let ws = Workspace::new();
    ws.codes(100..=109).patterns(&["^10[0-9]"]);

    ws.cmd()
        .args(["verify", "-i", "codes.json", "-p", "patterns.json", "--width", "3"])
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b[").not());
}

#[test]
fn color_env_forces_escapes() {
    let ws = Workspace::new();
    ws.codes(100..=109).patterns(&["^10[0-9]"]);

    ws.cmd()
        .env_remove("NO_COLOR")
        .env("COLOR", "1")
        .args(["verify", "-i", "codes.json", "-p", "patterns.json", "--width", "3"])
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b["));
}
