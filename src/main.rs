//! Swervpay command-line client.

use std::path::Path;
use std::process::ExitCode;

use swervpay::config::{Cli, Command, ValidatedConfig, write_default_config};

mod app;
mod run;

use app::{Exit, config_hint, setup_tracing};

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let exit = match &cli.command {
        Command::Init { output } => init(output),
        command => match ValidatedConfig::load(&cli) {
            Ok(config) => call_api(config, command),
            Err(e) => {
                eprintln!("Configuration error: {e}");
                if let Some(hint) = config_hint(&e) {
                    eprintln!("\n{hint}");
                }
                Exit::Config
            }
        },
    };

    exit.into()
}

/// Writes the commented config template to `output`.
fn init(output: &Path) -> Exit {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            Exit::Success
        }
        Err(e) => {
            eprintln!("Error: {e}");
            Exit::Config
        }
    }
}

/// Makes the API call for `command` on a fresh runtime.
#[cfg(not(tarpaulin_include))]
fn call_api(config: ValidatedConfig, command: &Command) -> Exit {
    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start async runtime: {e}");
            return Exit::Runtime;
        }
    };

    match runtime.block_on(run::execute(config, command)) {
        Ok(()) => Exit::Success,
        Err(e) => {
            tracing::error!("{e}");
            Exit::Runtime
        }
    }
}
