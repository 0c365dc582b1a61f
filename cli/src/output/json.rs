//! JSON output helpers for `--json` mode.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::report::ProvisionReport;

#[derive(Serialize)]
struct ReportJson<'a> {
    success: bool,
    #[serde(flatten)]
    report: &'a ProvisionReport,
}

/// Format the provisioning report.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "success": true,
///   "directory": "/etc/azure",
///   "artifacts": [
///     { "kind": "plugin_config", "path": "...", "mode": "0600", "error": null }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails, e.g. for a non-UTF-8 path.
pub fn format_report(report: &ProvisionReport) -> Result<String> {
    let obj = ReportJson {
        success: report.is_success(),
        report,
    };
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails (should not happen in
/// practice — `serde_json` only fails on non-finite floats and maps with
/// non-string keys, neither of which appear here).
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}
