//! vmsnapshot-hooks - Azure VM application-consistent backup hook provisioner

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vmsnapshot_hooks::cli::Cli;
use vmsnapshot_hooks::domain::error::ProvisionError;
use vmsnapshot_hooks::output::json;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json_mode = cli.json;
    match cli.run() {
        Ok(code) => code,
        Err(e) => {
            report_error(&e, json_mode);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}

fn report_error(e: &anyhow::Error, json_mode: bool) {
    if json_mode {
        let code = e
            .downcast_ref::<ProvisionError>()
            .map_or("internal", ProvisionError::code);
        match json::format_error(&format!("{e:#}"), code) {
            Ok(out) => println!("{out}"),
            Err(_) => println!("{e:#}"),
        }
    } else {
        println!("{e:#}");
    }
}
