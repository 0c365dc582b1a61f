//! Result of a provisioning run — one outcome per artifact.

use std::path::PathBuf;

use serde::{Serialize, Serializer};

use crate::domain::artifact::{ArtifactKind, display_mode};
use crate::domain::error::ProvisionError;

/// What happened to a single artifact.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactOutcome {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    #[serde(serialize_with = "serialize_mode")]
    pub mode: u32,
    /// `None` when the file was written and its mode set.
    pub error: Option<String>,
}

impl ArtifactOutcome {
    #[must_use]
    pub fn written(kind: ArtifactKind, path: PathBuf) -> Self {
        Self {
            kind,
            path,
            mode: kind.mode(),
            error: None,
        }
    }

    #[must_use]
    pub fn failed(kind: ArtifactKind, path: PathBuf, err: &ProvisionError) -> Self {
        Self {
            kind,
            path,
            mode: kind.mode(),
            error: Some(err.describe()),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregate of a provisioning run.
#[derive(Debug, Clone, Serialize)]
pub struct ProvisionReport {
    pub directory: PathBuf,
    pub artifacts: Vec<ArtifactOutcome>,
}

impl ProvisionReport {
    /// True only when every artifact was provisioned.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.artifacts.iter().all(ArtifactOutcome::is_success)
    }

    /// Outcomes that carry an error.
    pub fn failures(&self) -> impl Iterator<Item = &ArtifactOutcome> {
        self.artifacts.iter().filter(|o| !o.is_success())
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)] // signature fixed by serde
fn serialize_mode<S: Serializer>(mode: &u32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("0{}", display_mode(*mode)))
}
