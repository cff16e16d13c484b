// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavior of `pinrex generate`.

use crate::prelude::*;

#[test]
fn writes_patterns_to_stdout() {
    let ws = Workspace::new();
    ws.codes(100_100..=100_109);

    let output = ws
        .cmd()
        .args(["generate", "-i", "codes.json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let doc: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(regexes(&doc), vec!["^10010[0-9]"]);
}

#[test]
fn stdout_document_uses_four_space_indent() {
    let ws = Workspace::new();
    ws.codes([560_001]);

    ws.cmd()
        .args(["generate", "-i", "codes.json"])
        .assert()
        .success()
        .stdout("{\n    \"regexes\": [\n        \"^560001\"\n    ]\n}\n");
}

#[test]
fn writes_patterns_to_output_file() {
    let ws = Workspace::new();
    ws.codes([100_100, 100_101, 100_103, 100_104, 100_106, 100_108]);

    ws.cmd()
        .args(["generate", "-i", "codes.json", "-o", "out.json"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(regexes(&ws.read_json("out.json")), vec!["^10010[^2579]"]);
}

#[test]
fn accepts_string_codes() {
    let ws = Workspace::new();
    ws.file("codes.json", r#"{"postalCodes": ["110001", "110002"]}"#);

    ws.cmd()
        .args(["generate", "-i", "codes.json"])
        .assert()
        .success()
        .stdout(predicates::str::contains("^11000[12]"));
}

#[test]
fn low_limit_splits_patterns() {
    let ws = Workspace::new();
    ws.codes((100..=109).chain(200..=209).chain(300..=309));

    ws.cmd()
        .args(["generate", "-i", "codes.json", "--width", "3", "-l", "12", "-o", "out.json"])
        .assert()
        .success();

    assert_eq!(
        regexes(&ws.read_json("out.json")),
        vec!["^10[0-9]", "^20[0-9]", "^30[0-9]"]
    );
}

#[test]
fn verify_flag_reports_pass_on_stderr() {
    let ws = Workspace::new();
    ws.codes([100_001, 250_250, 999_999]);

    ws.cmd()
        .args(["generate", "-i", "codes.json", "--verify", "-o", "out.json"])
        .assert()
        .success()
        .stderr(predicates::str::contains("verify: PASS"));
}

#[test]
fn verify_flag_flags_unreachable_leading_zero_codes() {
    let ws = Workspace::new();
    ws.codes([42, 100]);

    ws.cmd()
        .args(["generate", "-i", "codes.json", "--width", "3", "--verify"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("unreachable: 1"));

    ws.cmd()
        .args([
            "generate",
            "-i",
            "codes.json",
            "--width",
            "3",
            "--verify",
            "--leading-zeros",
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains("^042"));
}

#[test]
fn empty_code_list_yields_empty_document() {
    let ws = Workspace::new();
    ws.codes([]);

    let output = ws
        .cmd()
        .args(["generate", "-i", "codes.json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let doc: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(regexes(&doc).is_empty());
}

#[test]
fn invalid_digit_exits_2() {
    let ws = Workspace::new();
    ws.file("codes.json", r#"{"postalCodes": ["56000A"]}"#);

    ws.cmd()
        .args(["generate", "-i", "codes.json"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("56000A"));
}

#[test]
fn wrong_width_exits_2() {
    let ws = Workspace::new();
    ws.codes([1_234_567]);

    ws.cmd()
        .args(["generate", "-i", "codes.json"])
        .assert()
        .code(2);
}

#[test]
fn malformed_document_exits_2() {
    let ws = Workspace::new();
    ws.file("codes.json", r#"{"pins": [560001]}"#);

    ws.cmd()
        .args(["generate", "-i", "codes.json"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("postalCodes"));
}

#[test]
fn missing_input_file_exits_2() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["generate", "-i", "absent.json"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("absent.json: file not found"));
}

#[test]
fn zero_limit_exits_2() {
    let ws = Workspace::new();
    ws.codes([100_000]);

    ws.cmd()
        .args(["generate", "-i", "codes.json", "-l", "0"])
        .assert()
        .code(2);
}

#[test]
fn verbose_prints_phase_lines() {
    let ws = Workspace::new();
    ws.codes([100_000, 100_001]);

    ws.cmd()
        .args(["generate", "-i", "codes.json", "-v"])
        .assert()
        .success()
        .stderr(predicates::str::contains("[verbose] === synthesis ==="));
}
