//! CLI argument parsing with clap derive

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use crate::app::{AppContext, AppFlags};
use crate::commands;
use crate::domain::artifact::TARGET_DIR;
use crate::infra::{EffectiveUser, LocalFs};

/// Provision the pre/post snapshot hooks for Azure VM application-consistent
/// backup into /etc/azure. Must be run as root.
#[derive(Parser)]
#[command(name = "vmsnapshot-hooks", version)]
pub struct Cli {
    /// Print the provisioning report as JSON
    #[arg(long)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output (also honours NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Provision the hooks and map the outcome to an exit code.
    ///
    /// # Errors
    ///
    /// Returns an error if the process is not elevated, the target directory
    /// cannot be created, or the embedded assets are unusable. Per-artifact
    /// failures yield `ExitCode::FAILURE` instead.
    pub fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            verbose: _,
        } = self;
        let app = AppContext::new(&AppFlags {
            no_color,
            quiet,
            json,
        });

        let report = commands::setup::run(&app, &EffectiveUser, &LocalFs, Path::new(TARGET_DIR))?;
        Ok(if report.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}
