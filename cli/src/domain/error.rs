//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, or `std::process`. All error types
//! implement `thiserror::Error` and convert to `anyhow::Error` via the `?`
//! operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Provisioning errors ───────────────────────────────────────────────────────

/// Errors raised while provisioning the snapshot hook artifacts.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("This tool must be run as root (sudo).\n\nUsage: sudo vmsnapshot-hooks")]
    NotElevated,

    #[error("Error creating directory {}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error creating {}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error setting permissions {mode:#o} on {}", path.display())]
    SetPermissions {
        path: PathBuf,
        mode: u32,
        #[source]
        source: std::io::Error,
    },
}

impl ProvisionError {
    /// Stable machine-readable code used in `--json` error objects.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotElevated => "not_elevated",
            Self::CreateDirectory { .. } => "create_directory",
            Self::WriteFile { .. } => "write_file",
            Self::SetPermissions { .. } => "set_permissions",
        }
    }

    /// The error message followed by its cause, e.g.
    /// `"Error creating /etc/azure/x: Permission denied (os error 13)"`.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut out = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            out.push_str(": ");
            out.push_str(&cause.to_string());
            source = cause.source();
        }
        out
    }
}

// ── Asset errors ──────────────────────────────────────────────────────────────

/// Errors raised when an embedded artifact does not match its fixed schema.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Embedded plugin config is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Embedded plugin config field '{field}' does not match the expected value")]
    UnexpectedValue { field: &'static str },
}
