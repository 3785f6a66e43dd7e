//! Flags and subcommands of the `swervpay` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// Swervpay: command-line access to the Swervpay payments API
///
/// Credentials come from flags, the environment or a TOML config file.
#[derive(Debug, Parser)]
#[command(name = "swervpay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Business ID (overrides SWERVPAY_BUSINESS_ID and the config file)
    #[arg(long = "business-id", global = true)]
    pub business_id: Option<String>,

    /// Secret key (overrides SWERVPAY_SECRET_KEY and the config file)
    #[arg(long = "secret-key", global = true)]
    pub secret_key: Option<String>,

    /// Explicit API base URL
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// Use the sandbox host
    #[arg(long, global = true)]
    pub sandbox: bool,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for swervpay
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },

    /// Show the authenticated business
    Business,

    /// List supported banks
    Banks,

    /// List transactions
    Transactions {
        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Page size
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },

    /// Resolve the holder name of a bank account
    Resolve {
        /// Account number to resolve
        #[arg(long = "account-number")]
        account_number: String,

        /// Bank code the account belongs to
        #[arg(long = "bank-code")]
        bank_code: String,
    },
}

impl Cli {
    /// Reads `std::env::args`, exiting with usage on bad input.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses an explicit argv; the first item is the program name.
    pub fn parse_from_iter<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(argv)
    }
}
