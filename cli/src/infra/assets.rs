//! Embedded assets — the 3 static files compiled into the binary.
//!
//! At compile time, `include_dir!` embeds everything under `assets/`:
//!   - `VMSnapshotScriptPluginConfig.json` — read by the snapshot extension
//!   - `pre_backup.sh`                     — quiesces the application
//!   - `post_backup.sh`                    — resumes the application

use anyhow::{Context, Result};
use include_dir::{Dir, include_dir};

use crate::domain::artifact::{Artifact, ArtifactKind};
use crate::domain::plugin_config;

/// All 3 embedded assets, compiled in at build time.
static EMBEDDED_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Return the raw bytes of a single embedded asset.
///
/// # Errors
///
/// Returns an error if no asset with the given `name` exists.
pub fn get_asset(name: &str) -> Result<&'static [u8]> {
    EMBEDDED_ASSETS
        .get_file(name)
        .map(|f| f.contents())
        .ok_or_else(|| anyhow::anyhow!("embedded asset not found: {name}"))
}

/// The artifacts to provision, in write order, with their embedded content.
///
/// The plugin config is checked against its fixed schema before it is
/// handed out.
///
/// # Errors
///
/// Returns an error if an asset is missing or the config does not match.
pub fn artifacts() -> Result<Vec<Artifact>> {
    let artifacts = ArtifactKind::ALL
        .iter()
        .map(|&kind| Ok(Artifact::new(kind, get_asset(kind.file_name())?)))
        .collect::<Result<Vec<_>>>()?;

    let config = get_asset(ArtifactKind::PluginConfig.file_name())?;
    plugin_config::verify(config).context("checking embedded plugin config")?;

    Ok(artifacts)
}
