//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::io;
use std::path::Path;

// ── Privilege Port ────────────────────────────────────────────────────────────

/// Reports whether the current process may write into protected system
/// directories.
pub trait PrivilegeCheck {
    /// `true` when running with administrator (root) privileges.
    fn is_elevated(&self) -> bool;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Raw filesystem operations needed to provision artifacts.
///
/// Implementations return the unwrapped `io::Error` so callers can attach
/// the path and operation as a typed domain error.
pub trait ArtifactFs {
    /// Create `path` and any missing parents. Succeeds if it already exists
    /// as a directory.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
    /// Write `content` to `path`, creating or truncating the file.
    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;
    /// Set the permission bits of `path` to `mode`.
    fn set_permissions(&self, path: &Path, mode: u32) -> io::Result<()>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Called once after the privilege check passes, before any filesystem
    /// change.
    fn start(&self, directory: &Path);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit an error message. Never suppressed.
    fn error(&self, message: &str);
}
