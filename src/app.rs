//! Process-level plumbing for the binary: exit statuses, logging, and
//! hints printed after a configuration failure.

use std::process::ExitCode;

use swervpay::config::{ConfigError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;

/// How the process ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The command completed (0).
    Success,
    /// Arguments, environment or config file were unusable (1).
    Config,
    /// The API call or its rendering failed (2).
    Runtime,
}

impl Exit {
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Config => 1,
            Self::Runtime => 2,
        }
    }
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        Self::from(exit.code())
    }
}

/// Suggests how to fix `error`, when there is an obvious remedy.
pub fn config_hint(error: &ConfigError) -> Option<&'static str> {
    match error {
        ConfigError::MissingRequired { field: f, .. }
            if *f == field::BUSINESS_ID || *f == field::SECRET_KEY =>
        {
            Some(
                "Set SWERVPAY_BUSINESS_ID and SWERVPAY_SECRET_KEY, or run 'swervpay init' to generate a configuration template.",
            )
        }
        ConfigError::FileRead { .. } => {
            Some("Run 'swervpay init' to generate a configuration template.")
        }
        _ => None,
    }
}

/// Installs the stderr subscriber. `RUST_LOG` overrides the default level.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
