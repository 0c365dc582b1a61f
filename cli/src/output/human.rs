//! Human-readable terminal renderer.

use crate::domain::artifact::{ArtifactKind, display_mode};
use crate::domain::report::ProvisionReport;
use crate::output::OutputContext;

/// Log file the snapshot extension writes while running the hooks.
const EXTENSION_LOG: &str =
    "/var/log/azure/Microsoft.Azure.RecoveryServices.VMSnapshotLinux/extension.log";

/// Renders provisioning output as human-readable terminal text.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the setup banner and the reminders shown before any change.
    pub fn render_preamble(&self) {
        if self.ctx.quiet {
            return;
        }
        self.ctx
            .header("Starting Azure VM application-consistent backup setup...");
        println!();
        self.ctx.warn("IMPORTANT: Before relying on these hooks, please:");
        println!("    1. Replace 'your-app-service' in the scripts with your actual service name");
        println!("    2. Add any additional application-specific commands as needed");
        println!("    3. Test the scripts manually before relying on them for backups");
        println!();
    }

    /// Render the final summary: files and next steps on success, a pointer
    /// to the errors above on failure.
    pub fn render_summary(&self, report: &ProvisionReport) {
        if !report.is_success() {
            println!();
            self.ctx.error("Setup failed. Please check the errors above.");
            return;
        }
        if self.ctx.quiet {
            return;
        }

        println!();
        self.ctx.success("Setup completed successfully!");
        self.ctx
            .header(&format!("Files created in {}:", report.directory.display()));
        for outcome in &report.artifacts {
            self.ctx.kv(
                &format!("  - {}", outcome.path.display()),
                &format!("(permissions: {})", display_mode(outcome.mode)),
            );
        }

        let pre = report.directory.join(ArtifactKind::PreHook.file_name());
        let post = report.directory.join(ArtifactKind::PostHook.file_name());
        println!();
        self.ctx.header("Next steps:");
        println!("    1. Edit the script files to replace 'your-app-service' with your actual service");
        println!("    2. Add any additional application-specific commands");
        println!(
            "    3. Test the scripts manually: sudo {} && sudo {}",
            pre.display(),
            post.display()
        );
        println!("    4. Monitor backup logs: {EXTENSION_LOG}");
        println!();
        self.ctx
            .info("Azure VM application-consistent backup is now configured.");
    }
}
