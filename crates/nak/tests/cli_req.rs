//! CLI tests that run the `nak` binary.
//!
//! Every test points `NAK_CONFIG` at a temporary file so the user's own
//! configuration never leaks in.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::{json, Value};
use tempfile::TempDir;

struct CliContext {
    _dir: TempDir,
    config_path: PathBuf,
}

impl CliContext {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        Self {
            _dir: dir,
            config_path,
        }
    }

    fn run(&self, args: &[&str]) -> Output {
        run_with_config(&self.config_path, args)
    }

    fn stdout(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "nak {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).unwrap()
    }
}

fn run_with_config(config_path: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nak"))
        .args(args)
        .env("NAK_CONFIG", config_path)
        .output()
        .expect("failed to run nak")
}

#[test]
fn test_req_without_selectors() {
    let ctx = CliContext::new();
    assert_eq!(ctx.stdout(&["req"]), "[\"REQ\",\"nak\",{}]\n");
}

#[test]
fn test_req_bare_kind_and_author() {
    let ctx = CliContext::new();
    let out = ctx.stdout(&["req", "--bare", "-k", "1", "-a", "abc"]);
    assert_eq!(out, "{\"kinds\":[1],\"authors\":[\"abc\"]}\n");
}

#[test]
fn test_req_merges_tag_sources() {
    let ctx = CliContext::new();
    let out = ctx.stdout(&[
        "req", "-t", "e=1", "-t", "p=2", "-e", "3", "-p", "4", "-t", "ab=1", "-t", "novalue",
    ]);

    let value: Value = serde_json::from_str(out.trim_end()).unwrap();
    assert_eq!(
        value,
        json!(["REQ", "nak", {"#e": ["1", "3"], "#p": ["2", "4"]}])
    );
}

#[test]
fn test_req_zero_bounds_and_limit_are_omitted() {
    let ctx = CliContext::new();
    let out = ctx.stdout(&["req", "--bare", "-s", "0", "-u", "0", "-l", "0"]);
    assert_eq!(out, "{}\n");

    let out = ctx.stdout(&["req", "--bare", "-s", "100", "-l", "5"]);
    assert_eq!(out, "{\"since\":100,\"limit\":5}\n");
}

#[test]
fn test_req_verbose_reports_dropped_tags_on_stderr() {
    let ctx = CliContext::new();
    let output = ctx.run(&["req", "--verbose", "-t", "ab=1", "-s", "1700000000"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stdout, "[\"REQ\",\"nak\",{\"since\":1700000000}]\n");
    assert!(stderr.contains("Ignoring tag 'ab=1'"));
    assert!(stderr.contains("2023-11-14 22:13:20 UTC"));
}

#[test]
fn test_req_verbose_reports_unrestricted_filter() {
    let ctx = CliContext::new();
    let output = ctx.run(&["req", "--verbose", "-t", "novalue"]);

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Filter has no restrictions"));

    let output = ctx.run(&["req", "--verbose", "-k", "1"]);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stderr.contains("Filter has no restrictions"));
}

#[test]
fn test_quiet_keeps_result_line_only() {
    let ctx = CliContext::new();
    assert_eq!(ctx.stdout(&["-q", "config", "set", "req.bare", "false"]), "");
    assert_eq!(ctx.stdout(&["--quiet"]), "");
    assert_eq!(ctx.stdout(&["req", "--quiet", "-k", "1"]), "[\"REQ\",\"nak\",{\"kinds\":[1]}]\n");

    let output = ctx.run(&["req", "--quiet", "--verbose"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_config_default_bare_mode() {
    let ctx = CliContext::new();
    ctx.stdout(&["config", "set", "req.bare", "true"]);

    assert!(ctx.config_path.exists());
    assert_eq!(ctx.stdout(&["req", "-k", "1"]), "{\"kinds\":[1]}\n");
}

#[test]
fn test_config_path_prints_override() {
    let ctx = CliContext::new();
    let out = ctx.stdout(&["config", "path"]);
    assert_eq!(out.trim_end(), ctx.config_path.display().to_string());
}

#[test]
fn test_broken_config_fails_with_config_error() {
    let ctx = CliContext::new();
    fs::write(&ctx.config_path, "[req\nbare = ").unwrap();

    let output = ctx.run(&["req", "--json"]);
    assert_eq!(output.status.code(), Some(5));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    let error: Value = serde_json::from_str(stderr.trim_end()).unwrap();
    assert_eq!(error["error"]["code"], "CONFIG_ERROR");
}

#[test]
fn test_unknown_config_key_fails() {
    let ctx = CliContext::new();
    let output = ctx.run(&["config", "set", "req.limit", "5"]);
    assert_eq!(output.status.code(), Some(5));
    assert!(!ctx.config_path.exists());
}
