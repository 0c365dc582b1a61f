//! Schema of `VMSnapshotScriptPluginConfig.json`, the file the Azure VM
//! snapshot extension reads to locate and run the hook scripts.
//!
//! Pure functions only — no I/O.

use serde::{Deserialize, Serialize};

use crate::domain::artifact::{ArtifactKind, TARGET_DIR};
use crate::domain::error::AssetError;

/// Plugin the snapshot extension dispatches to.
pub const PLUGIN_NAME: &str = "ScriptRunner";

/// Seconds the extension waits for each hook before giving up.
pub const HOOK_TIMEOUT_SECS: u32 = 30;

/// Script plugin configuration. Every field is required and unknown fields
/// are rejected, so a parsed value always matches the fixed schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScriptPluginConfig {
    pub plugin_name: String,
    pub pre_script_location: String,
    pub post_script_location: String,
    pub pre_script_params: [String; 2],
    pub post_script_params: [String; 2],
    pub pre_script_no_of_retries: u32,
    pub post_script_no_of_retries: u32,
    pub timeout_in_seconds: u32,
    pub continue_backup_on_failure: bool,
    pub fs_freeze_enabled: bool,
}

impl ScriptPluginConfig {
    /// The literal configuration shipped with this tool.
    #[must_use]
    pub fn expected() -> Self {
        Self {
            plugin_name: PLUGIN_NAME.to_string(),
            pre_script_location: format!("{TARGET_DIR}/{}", ArtifactKind::PreHook.file_name()),
            post_script_location: format!("{TARGET_DIR}/{}", ArtifactKind::PostHook.file_name()),
            pre_script_params: [String::new(), String::new()],
            post_script_params: [String::new(), String::new()],
            pre_script_no_of_retries: 0,
            post_script_no_of_retries: 0,
            timeout_in_seconds: HOOK_TIMEOUT_SECS,
            continue_backup_on_failure: true,
            fs_freeze_enabled: true,
        }
    }

    /// Name of the first field whose value differs from `other`.
    fn first_mismatch(&self, other: &Self) -> Option<&'static str> {
        [
            ("pluginName", self.plugin_name == other.plugin_name),
            ("preScriptLocation", self.pre_script_location == other.pre_script_location),
            ("postScriptLocation", self.post_script_location == other.post_script_location),
            ("preScriptParams", self.pre_script_params == other.pre_script_params),
            ("postScriptParams", self.post_script_params == other.post_script_params),
            ("preScriptNoOfRetries", self.pre_script_no_of_retries == other.pre_script_no_of_retries),
            ("postScriptNoOfRetries", self.post_script_no_of_retries == other.post_script_no_of_retries),
            ("timeoutInSeconds", self.timeout_in_seconds == other.timeout_in_seconds),
            ("continueBackupOnFailure", self.continue_backup_on_failure == other.continue_backup_on_failure),
            ("fsFreezeEnabled", self.fs_freeze_enabled == other.fs_freeze_enabled),
        ]
        .into_iter()
        .find_map(|(field, same)| (!same).then_some(field))
    }
}

/// Parse `content` and check it matches [`ScriptPluginConfig::expected`].
///
/// # Errors
///
/// Returns [`AssetError::InvalidJson`] if the bytes are not valid JSON for the
/// schema (missing or unknown fields included), or
/// [`AssetError::UnexpectedValue`] naming the first field that differs.
pub fn verify(content: &[u8]) -> Result<ScriptPluginConfig, AssetError> {
    let parsed: ScriptPluginConfig = serde_json::from_slice(content)?;
    if let Some(field) = parsed.first_mismatch(&ScriptPluginConfig::expected()) {
        return Err(AssetError::UnexpectedValue { field });
    }
    Ok(parsed)
}
