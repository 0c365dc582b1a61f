//! Application service — provision the snapshot hook artifacts.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.
//!
//! The run is best effort: once the directory exists every artifact is
//! attempted, and artifacts written before a failure are left in place.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::application::ports::{ArtifactFs, PrivilegeCheck, ProgressReporter};
use crate::domain::artifact::{Artifact, display_mode};
use crate::domain::error::ProvisionError;
use crate::domain::report::{ArtifactOutcome, ProvisionReport};

/// Fail with [`ProvisionError::NotElevated`] unless running as root.
///
/// # Errors
///
/// Returns `NotElevated` when the privilege check fails.
pub fn require_elevated(privilege: &impl PrivilegeCheck) -> Result<(), ProvisionError> {
    if privilege.is_elevated() {
        Ok(())
    } else {
        Err(ProvisionError::NotElevated)
    }
}

/// Create `dir` and its parents if missing. A no-op when it already exists.
///
/// # Errors
///
/// Returns `CreateDirectory` carrying the OS error, e.g. when the path is
/// occupied by a regular file or the filesystem is read-only.
pub fn ensure_directory(
    fs: &impl ArtifactFs,
    reporter: &impl ProgressReporter,
    dir: &Path,
) -> Result<(), ProvisionError> {
    debug!(path = %dir.display(), "ensuring directory");
    fs.create_dir_all(dir)
        .map_err(|source| ProvisionError::CreateDirectory {
            path: dir.to_path_buf(),
            source,
        })?;
    reporter.success(&format!("Directory {} created or already exists.", dir.display()));
    Ok(())
}

/// Write `artifact` into `dir`, overwriting any existing file, then set its
/// mode. Returns the destination path.
///
/// # Errors
///
/// Returns `WriteFile` or `SetPermissions`. A file whose content was written
/// but whose mode could not be set is left on disk.
pub fn write_artifact(
    fs: &impl ArtifactFs,
    reporter: &impl ProgressReporter,
    dir: &Path,
    artifact: &Artifact,
) -> Result<PathBuf, ProvisionError> {
    let path = dir.join(artifact.file_name());
    let mode = artifact.mode();

    debug!(path = %path.display(), bytes = artifact.content.len(), "writing artifact");
    fs.write(&path, artifact.content)
        .map_err(|source| ProvisionError::WriteFile {
            path: path.clone(),
            source,
        })?;
    reporter.success(&format!("Created {}", path.display()));

    debug!(path = %path.display(), mode = %display_mode(mode), "setting permissions");
    fs.set_permissions(&path, mode)
        .map_err(|source| ProvisionError::SetPermissions {
            path: path.clone(),
            mode,
            source,
        })?;
    reporter.success(&format!("Set permissions {mode:#o} on {}", path.display()));

    Ok(path)
}

/// Provision every artifact into `dir`.
///
/// Steps:
/// 1. Require elevated privileges (nothing is touched otherwise)
/// 2. Ensure the directory exists (nothing is written if this fails)
/// 3. Write each artifact in order, continuing past failures
///
/// # Errors
///
/// Returns `NotElevated` or `CreateDirectory`. Artifact failures do not
/// return an error; they are recorded in the report, whose
/// [`ProvisionReport::is_success`] is then `false`.
pub fn run(
    privilege: &impl PrivilegeCheck,
    fs: &impl ArtifactFs,
    reporter: &impl ProgressReporter,
    dir: &Path,
    artifacts: &[Artifact],
) -> Result<ProvisionReport, ProvisionError> {
    require_elevated(privilege)?;
    reporter.start(dir);

    ensure_directory(fs, reporter, dir)?;

    let outcomes = artifacts
        .iter()
        .map(|artifact| match write_artifact(fs, reporter, dir, artifact) {
            Ok(path) => ArtifactOutcome::written(artifact.kind, path),
            Err(e) => {
                warn!(file = artifact.file_name(), error = %e.describe(), "artifact failed");
                reporter.error(&e.describe());
                ArtifactOutcome::failed(artifact.kind, dir.join(artifact.file_name()), &e)
            }
        })
        .collect();

    let report = ProvisionReport {
        directory: dir.to_path_buf(),
        artifacts: outcomes,
    };
    info!(
        directory = %dir.display(),
        failed = report.failures().count(),
        "provisioning finished"
    );
    Ok(report)
}
