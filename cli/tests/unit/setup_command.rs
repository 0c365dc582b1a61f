//! Setup command against a real filesystem rooted in a temp dir.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use vmsnapshot_hooks::app::{AppContext, AppFlags};
use vmsnapshot_hooks::application::ports::PrivilegeCheck;
use vmsnapshot_hooks::commands::setup;
use vmsnapshot_hooks::domain::artifact::ArtifactKind;
use vmsnapshot_hooks::domain::error::ProvisionError;
use vmsnapshot_hooks::domain::plugin_config::{self, ScriptPluginConfig};
use vmsnapshot_hooks::infra::LocalFs;
use vmsnapshot_hooks::infra::assets::get_asset;

struct Root(bool);

impl PrivilegeCheck for Root {
    fn is_elevated(&self) -> bool {
        self.0
    }
}

fn app(json: bool) -> AppContext {
    AppContext::new(&AppFlags {
        no_color: true,
        quiet: true,
        json,
    })
}

fn mode_of(path: &Path) -> u32 {
    std::fs::metadata(path)
        .expect("metadata")
        .permissions()
        .mode()
        & 0o7777
}

fn assert_provisioned(dir: &Path) {
    for kind in ArtifactKind::ALL {
        let path = dir.join(kind.file_name());
        let written = std::fs::read(&path).expect("artifact written");
        assert_eq!(written, get_asset(kind.file_name()).expect("asset"), "{kind:?} content");
        assert_eq!(mode_of(&path), kind.mode(), "{kind:?} mode");
    }
}

#[test]
fn test_setup_creates_missing_directory_and_all_artifacts() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = tmp.path().join("etc").join("azure");

    let report = setup::run(&app(false), &Root(true), &LocalFs, &dir).expect("setup");

    assert!(report.is_success());
    assert!(dir.is_dir());
    assert_provisioned(&dir);
    assert_eq!(mode_of(&dir.join("VMSnapshotScriptPluginConfig.json")), 0o600);
    assert_eq!(mode_of(&dir.join("pre_backup.sh")), 0o700);
    assert_eq!(mode_of(&dir.join("post_backup.sh")), 0o700);
}

#[test]
fn test_setup_is_idempotent() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = tmp.path().join("azure");

    setup::run(&app(false), &Root(true), &LocalFs, &dir).expect("first run");
    let report = setup::run(&app(false), &Root(true), &LocalFs, &dir).expect("second run");

    assert!(report.is_success());
    assert_provisioned(&dir);
    assert_eq!(std::fs::read_dir(&dir).expect("read_dir").count(), 3);
}

#[test]
fn test_setup_overwrites_edited_files_and_resets_modes() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = tmp.path().join("azure");
    std::fs::create_dir(&dir).expect("mkdir");
    let pre = dir.join("pre_backup.sh");
    std::fs::write(&pre, "#!/bin/bash\n# operator edits that are much longer than nothing\n")
        .expect("write");
    std::fs::set_permissions(&pre, std::fs::Permissions::from_mode(0o644)).expect("chmod");

    setup::run(&app(false), &Root(true), &LocalFs, &dir).expect("setup");

    assert_provisioned(&dir);
}

#[test]
fn test_setup_not_elevated_makes_no_changes() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = tmp.path().join("azure");

    let err = setup::run(&app(false), &Root(false), &LocalFs, &dir).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ProvisionError>(),
        Some(ProvisionError::NotElevated)
    ));
    assert!(!dir.exists());
}

#[test]
fn test_setup_fails_when_directory_path_is_a_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = tmp.path().join("azure");
    std::fs::write(&dir, b"occupied").expect("write");

    let err = setup::run(&app(false), &Root(true), &LocalFs, &dir).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ProvisionError>(),
        Some(ProvisionError::CreateDirectory { .. })
    ));
    assert!(dir.is_file());
    assert_eq!(std::fs::read(&dir).expect("read"), b"occupied");
}

#[test]
fn test_setup_continues_past_a_failed_artifact() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = tmp.path().join("azure");
    // A directory where the pre-hook should go makes its write fail, even as root.
    std::fs::create_dir_all(dir.join("pre_backup.sh")).expect("mkdir");

    let report = setup::run(&app(false), &Root(true), &LocalFs, &dir).expect("setup");

    assert!(!report.is_success());
    let failed: Vec<_> = report.failures().map(|o| o.kind).collect();
    assert_eq!(failed, [ArtifactKind::PreHook]);
    assert!(report.artifacts[1].error.as_deref().unwrap().starts_with("Error creating"));
    // Config (before) and post-hook (after) are still provisioned.
    assert_eq!(mode_of(&dir.join("VMSnapshotScriptPluginConfig.json")), 0o600);
    assert_eq!(mode_of(&dir.join("post_backup.sh")), 0o700);
}

#[test]
fn test_setup_json_mode_returns_report() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = tmp.path().join("azure");

    let report = setup::run(&app(true), &Root(true), &LocalFs, &dir).expect("setup");

    assert!(report.is_success());
    assert_eq!(report.directory, dir);
    assert_eq!(report.artifacts.len(), 3);
}

#[test]
fn test_written_config_is_valid_json_matching_schema() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = tmp.path().join("azure");

    setup::run(&app(false), &Root(true), &LocalFs, &dir).expect("setup");

    let bytes = std::fs::read(dir.join("VMSnapshotScriptPluginConfig.json")).expect("read");
    let cfg = plugin_config::verify(&bytes).expect("schema");
    assert_eq!(cfg, ScriptPluginConfig::expected());
    let v: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(v["preScriptLocation"], "/etc/azure/pre_backup.sh");
    assert_eq!(v["postScriptLocation"], "/etc/azure/post_backup.sh");
    assert_eq!(v["timeoutInSeconds"], 30);
    assert_eq!(v["continueBackupOnFailure"], true);
}
