//! Integration tests for argument parsing and the privilege gate.

#![allow(clippy::expect_used)]

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use vmsnapshot_hooks::application::ports::PrivilegeCheck;
use vmsnapshot_hooks::infra::EffectiveUser;

fn vmsnapshot_hooks() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vmsnapshot-hooks"));
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd
}

// --- Help and version tests ---

#[test]
fn test_help_flag_describes_tool() {
    vmsnapshot_hooks()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("/etc/azure"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_version_flag_shows_version() {
    vmsnapshot_hooks()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!(
            "vmsnapshot-hooks ",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_unknown_argument_exits_2() {
    vmsnapshot_hooks()
        .arg("--target")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unexpected argument"));
}

// --- Privilege gate ---

#[test]
fn test_non_root_run_exits_1_without_changes() {
    if EffectiveUser.is_elevated() {
        return;
    }
    let hook = Path::new("/etc/azure/pre_backup.sh");
    let existed = hook.exists();

    vmsnapshot_hooks()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("must be run as root"))
        .stdout(predicate::str::contains("Starting").not());

    assert_eq!(hook.exists(), existed);
}

#[test]
fn test_non_root_run_json_reports_error_object() {
    if EffectiveUser.is_elevated() {
        return;
    }
    let output = vmsnapshot_hooks()
        .arg("--json")
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(v["error"], true);
    assert_eq!(v["code"], "not_elevated");
}
