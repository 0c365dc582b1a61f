//! Setup command — provision the snapshot hooks and render the outcome.

use std::path::Path;

use anyhow::Result;

use crate::app::{AppContext, OutputMode};
use crate::application::ports::{ArtifactFs, PrivilegeCheck};
use crate::application::services::provision;
use crate::domain::report::ProvisionReport;
use crate::infra::assets;
use crate::output::{HumanRenderer, SilentReporter, TerminalReporter, json};

/// Run the provisioning use-case against `dir`.
///
/// Human mode streams per-step status lines and a closing summary; JSON mode
/// prints only the final report.
///
/// # Errors
///
/// Returns an error if the embedded assets are unusable, the process is not
/// elevated, or `dir` cannot be created. Artifact failures are reported in
/// the returned `ProvisionReport`.
pub fn run(
    app: &AppContext,
    privilege: &impl PrivilegeCheck,
    fs: &impl ArtifactFs,
    dir: &Path,
) -> Result<ProvisionReport> {
    let artifacts = assets::artifacts()?;

    let report = match app.mode {
        OutputMode::Human => {
            let reporter = TerminalReporter::new(&app.output);
            let report = provision::run(privilege, fs, &reporter, dir, &artifacts)?;
            HumanRenderer::new(&app.output).render_summary(&report);
            report
        }
        OutputMode::Json => {
            let report = provision::run(privilege, fs, &SilentReporter, dir, &artifacts)?;
            println!("{}", json::format_report(&report)?);
            report
        }
    };
    Ok(report)
}
