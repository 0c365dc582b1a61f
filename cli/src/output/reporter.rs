//! `ProgressReporter` implementations for the Presentation layer.
//!
//! `TerminalReporter` wraps `&OutputContext` so the provisioning service can
//! emit progress events without depending on any presentation type directly.
//! `SilentReporter` is used in `--json` mode, where only the final report is
//! printed.

use std::path::Path;

use crate::application::ports::ProgressReporter;
use crate::output::{HumanRenderer, OutputContext};

/// Terminal progress reporter that wraps an `OutputContext`.
///
/// - `start()` prints the setup preamble (suppressed when `ctx.quiet`)
/// - `success()` prints `"  ✓ {message}"` (suppressed when `ctx.quiet`)
/// - `error()` prints `"  ✗ {message}"` to stdout (never suppressed)
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn start(&self, _directory: &Path) {
        HumanRenderer::new(self.ctx).render_preamble();
    }

    fn success(&self, message: &str) {
        self.ctx.success(message);
    }

    fn error(&self, message: &str) {
        self.ctx.error(message);
    }
}

/// Discards every progress event.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn start(&self, _directory: &Path) {}
    fn success(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
