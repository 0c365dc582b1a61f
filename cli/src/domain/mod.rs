//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod artifact;
pub mod error;
pub mod plugin_config;
pub mod report;

pub use artifact::{Artifact, ArtifactKind, CONFIG_MODE, SCRIPT_MODE, TARGET_DIR};
pub use error::{AssetError, ProvisionError};
pub use plugin_config::ScriptPluginConfig;
pub use report::{ArtifactOutcome, ProvisionReport};
