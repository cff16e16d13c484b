// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config discovery and precedence.

use crate::prelude::*;

#[test]
fn discovered_config_sets_width_and_limit() {
    let ws = Workspace::new();
    ws.config("version = 1\n[generate]\nwidth = 3\nlimit = 12\n")
        .codes((100..=109).chain(200..=209).chain(300..=309));

    ws.cmd()
        .args(["generate", "-i", "codes.json", "-o", "out.json"])
        .assert()
        .success();

    assert_eq!(
        regexes(&ws.read_json("out.json")),
        vec!["^10[0-9]", "^20[0-9]", "^30[0-9]"]
    );
}

#[test]
fn flags_override_config() {
    let ws = Workspace::new();
    ws.config("version = 1\n[generate]\nwidth = 3\nlimit = 12\n")
        .codes((100..=109).chain(200..=209).chain(300..=309));

    ws.cmd()
        .args(["generate", "-i", "codes.json", "-l", "1000", "-o", "out.json"])
        .assert()
        .success();

    assert_eq!(
        regexes(&ws.read_json("out.json")),
        vec!["(^10[0-9]|^20[0-9]|^30[0-9])"]
    );
}

#[test]
fn explicit_config_flag() {
    let ws = Workspace::new();
    ws.file("custom.toml", "version = 1\n[verify]\nleading_zeros = true\n")
        .codes([42, 100])
        .patterns(&["(^042|^100)"]);

    ws.cmd()
        .args([
            "verify", "-C", "custom.toml", "-i", "codes.json", "-p", "patterns.json", "--width",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains("domain: 000..=999"));
}

#[test]
fn config_env_var() {
    let ws = Workspace::new();
    ws.file("custom.toml", "version = 1\n[generate]\nwidth = 3\n")
        .codes(100..=109);

    ws.cmd()
        .env("PINREX_CONFIG", "custom.toml")
        .args(["generate", "-i", "codes.json"])
        .assert()
        .success()
        .stdout(predicates::str::contains("^10[0-9]"));
}

#[test]
fn missing_explicit_config_exits_2() {
    let ws = Workspace::new();
    ws.codes([100_000]);

    ws.cmd()
        .args(["generate", "-C", "missing.toml", "-i", "codes.json"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("config file not found"));
}

#[test]
fn unsupported_version_exits_2() {
    let ws = Workspace::new();
    ws.config("version = 2\n").codes([100_000]);

    ws.cmd()
        .args(["generate", "-i", "codes.json"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 2"));
}

#[test]
fn unknown_keys_warn() {
    let ws = Workspace::new();
    ws.config("version = 1\n[generate]\nstyle = \"dense\"\n")
        .codes([100_000]);

    ws.cmd()
        .args(["generate", "-i", "codes.json"])
        .assert()
        .success()
        .stderr(predicates::str::contains("unrecognized field `generate.style`"));
}
