//! The `swervpay.toml` file format and its `init` template.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Contents of a config file. Every key may be left out; missing values
/// fall through to the environment and defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// API credentials
    #[serde(default)]
    pub credentials: CredentialsSection,

    /// Connection settings
    #[serde(default)]
    pub client: ClientSection,
}

/// Credentials section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialsSection {
    /// Business identifier
    pub business_id: Option<String>,

    /// Secret API key
    pub secret_key: Option<String>,
}

/// Client connection section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientSection {
    /// Use the sandbox host
    pub sandbox: Option<bool>,

    /// Explicit base URL, overriding the sandbox/production default
    pub base_url: Option<String>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,

    /// API version segment
    pub api_version: Option<String>,
}

impl TomlConfig {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::FileRead`] or [`ConfigError::TomlParse`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        std::fs::read_to_string(path)
            .map_err(|source| ConfigError::FileRead {
                path: path.to_path_buf(),
                source,
            })
            .and_then(|text| Self::parse(&text))
    }

    /// # Errors
    ///
    /// [`ConfigError::TomlParse`] for malformed TOML or unknown keys.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

/// Commented template written by `swervpay init`.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Swervpay client configuration
#
# Values can also come from the environment (SWERVPAY_BUSINESS_ID,
# SWERVPAY_SECRET_KEY, SWERVPAY_BASE_URL, SWERVPAY_SANDBOX) or CLI flags.
# Precedence: CLI > environment > this file > built-in defaults.

[credentials]
# Business ID from the dashboard (required)
# business_id = "bus_..."

# Secret key from the dashboard (required)
# secret_key = "sk_..."

[client]
# Use the sandbox host instead of production (default: false)
sandbox = true

# Explicit base URL; overrides the sandbox/production default
# base_url = "https://sandbox.swervpay.co/api/v1/"

# Request timeout in seconds (default: 30)
# timeout = 30

# API version used to build the default base URL (default: "v1")
# api_version = "v1"
"#
    .to_string()
}
