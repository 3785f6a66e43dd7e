//! Configuration layer for the Swervpay client.
//!
//! This module provides:
//! - The immutable client settings ([`ClientConfig`], [`ClientConfigBuilder`])
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Merged configuration for the binary ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! The binary resolves values with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **Environment variables** (`SWERVPAY_BUSINESS_ID`, `SWERVPAY_SECRET_KEY`,
//!    `SWERVPAY_BASE_URL`, `SWERVPAY_SANDBOX`)
//! 3. **TOML config file**
//! 4. **Built-in defaults**
//!
//! Timeout and API version are file-only settings.
//!
//! # Base URL
//!
//! When no base URL is given, the sandbox flag picks between
//! `https://sandbox.swervpay.co/api/<version>/` and
//! `https://api.swervpay.co/api/<version>/`. An explicit base URL gets a
//! trailing slash appended if missing, so `https://host/api/v1` and
//! `https://host/api/v1/` behave the same.

mod cli;
mod client;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command};
pub use client::{ClientConfig, ClientConfigBuilder};
pub use error::{ConfigError, field};
pub use self::toml::{ClientSection, CredentialsSection, TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
