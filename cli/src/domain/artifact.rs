//! The fixed artifacts provisioned for the VM snapshot plugin.
//!
//! Pure data only — no I/O. Content bytes are supplied by the infra layer
//! from the assets embedded at build time.

use serde::Serialize;

// ── Constants ────────────────────────────────────────────────────────────────

/// Directory the snapshot extension reads its hooks and config from.
pub const TARGET_DIR: &str = "/etc/azure";

/// Owner read/write only.
pub const CONFIG_MODE: u32 = 0o600;

/// Owner read/write/execute only.
pub const SCRIPT_MODE: u32 = 0o700;

// ── Artifact kinds ───────────────────────────────────────────────────────────

/// One of the three files this tool writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// `VMSnapshotScriptPluginConfig.json`
    PluginConfig,
    /// `pre_backup.sh`, run before the snapshot is taken.
    PreHook,
    /// `post_backup.sh`, run after the snapshot completes.
    PostHook,
}

impl ArtifactKind {
    /// All kinds in write order: config first, then pre-hook, then post-hook.
    pub const ALL: [Self; 3] = [Self::PluginConfig, Self::PreHook, Self::PostHook];

    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::PluginConfig => "VMSnapshotScriptPluginConfig.json",
            Self::PreHook => "pre_backup.sh",
            Self::PostHook => "post_backup.sh",
        }
    }

    #[must_use]
    pub fn mode(self) -> u32 {
        match self {
            Self::PluginConfig => CONFIG_MODE,
            Self::PreHook | Self::PostHook => SCRIPT_MODE,
        }
    }
}

/// A file to provision: its kind (name and mode) and literal content.
#[derive(Debug, Clone, Copy)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub content: &'static [u8],
}

impl Artifact {
    #[must_use]
    pub fn new(kind: ArtifactKind, content: &'static [u8]) -> Self {
        Self { kind, content }
    }

    #[must_use]
    pub fn file_name(&self) -> &'static str {
        self.kind.file_name()
    }

    #[must_use]
    pub fn mode(&self) -> u32 {
        self.kind.mode()
    }
}

/// Formats a mode the way `ls`-minded operators read it, e.g. `600`.
#[must_use]
pub fn display_mode(mode: u32) -> String {
    format!("{mode:o}")
}
