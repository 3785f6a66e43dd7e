//! Validated configuration after merging CLI, environment and TOML sources.
//!
//! This is the exterior configuration code for the binary. The API client
//! itself only ever sees the resulting [`ClientConfig`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::cli::Cli;
use super::client::ClientConfig;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Settings handed to the API client
    pub client: ClientConfig,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (verbose: {})", self.client, self.verbose)
    }
}

impl ValidatedConfig {
    /// Loads configuration using the process environment and the config
    /// file named by `--config`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, or if
    /// the merged values fail validation (see [`Self::from_sources`]).
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = match cli.config {
            Some(ref path) => Some(TomlConfig::load(&expand_tilde(path))?),
            None => None,
        };

        Self::from_sources(cli, |name| std::env::var(name).ok(), toml.as_ref())
    }

    /// Merges the three sources with precedence CLI > environment > TOML > defaults.
    ///
    /// `env` looks up a variable by name; empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Business ID or secret key is missing from every source
    /// - `SWERVPAY_SANDBOX` is not a recognizable boolean
    /// - The base URL or timeout is invalid
    pub fn from_sources<E>(
        cli: &Cli,
        env: E,
        toml: Option<&TomlConfig>,
    ) -> Result<Self, ConfigError>
    where
        E: Fn(&str) -> Option<String>,
    {
        let env = |name: &str| env(name).filter(|v| !v.trim().is_empty());
        let credentials = toml.map(|t| &t.credentials);
        let section = toml.map(|t| &t.client);

        let business_id = cli
            .business_id
            .clone()
            .or_else(|| env(defaults::ENV_BUSINESS_ID))
            .or_else(|| credentials.and_then(|c| c.business_id.clone()))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::BUSINESS_ID,
                    "Use --business-id, SWERVPAY_BUSINESS_ID, or [credentials] business_id.",
                )
            })?;

        let secret_key = cli
            .secret_key
            .clone()
            .or_else(|| env(defaults::ENV_SECRET_KEY))
            .or_else(|| credentials.and_then(|c| c.secret_key.clone()))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::SECRET_KEY,
                    "Use --secret-key, SWERVPAY_SECRET_KEY, or [credentials] secret_key.",
                )
            })?;

        // Flags only enable: --sandbox can't turn a configured sandbox off.
        let sandbox = if cli.sandbox {
            true
        } else if let Some(value) = env(defaults::ENV_SANDBOX) {
            parse_bool(defaults::ENV_SANDBOX, &value)?
        } else {
            section.and_then(|s| s.sandbox).unwrap_or(false)
        };

        let mut builder = ClientConfig::builder(business_id, secret_key).with_sandbox(sandbox);

        if let Some(base_url) = cli
            .base_url
            .clone()
            .or_else(|| env(defaults::ENV_BASE_URL))
            .or_else(|| section.and_then(|s| s.base_url.clone()))
        {
            builder = builder.with_base_url(base_url);
        }
        if let Some(secs) = section.and_then(|s| s.timeout) {
            builder = builder.with_timeout(Duration::from_secs(secs));
        }
        if let Some(version) = section.and_then(|s| s.api_version.clone()) {
            builder = builder.with_api_version(version);
        }

        Ok(Self {
            client: builder.build()?,
            verbose: cli.verbose,
        })
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let path = expand_tilde(path);
    let template = super::toml::default_config_template();
    std::fs::write(&path, template).map_err(|e| ConfigError::FileWrite { path, source: e })
}

/// Replaces a leading `~` with the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest)),
        Err(_) => path.to_path_buf(),
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}
