//! Immutable client configuration.

use std::fmt;
use std::time::Duration;

use url::Url;

use super::defaults;
use super::error::ConfigError;

/// Connection settings for a [`SwervpayClient`](crate::SwervpayClient).
///
/// Built once through [`ClientConfig::builder`]; the base URL is resolved
/// at build time (explicit override, otherwise the sandbox or production
/// host for the configured API version) and never changes afterwards.
///
/// # Example
///
/// ```
/// use swervpay::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::builder("bus_123", "sk_test_456")
///     .with_sandbox(true)
///     .with_timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url().as_str(), "https://sandbox.swervpay.co/api/v1/");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    business_id: String,
    secret_key: String,
    base_url: Url,
    sandbox: bool,
    timeout: Duration,
    api_version: String,
}

impl ClientConfig {
    /// Starts a builder with the two required credentials.
    #[must_use]
    pub fn builder(
        business_id: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> ClientConfigBuilder {
        ClientConfigBuilder {
            business_id: business_id.into(),
            secret_key: secret_key.into(),
            base_url: None,
            sandbox: false,
            timeout: defaults::timeout(),
            api_version: defaults::API_VERSION.to_string(),
        }
    }

    /// Business identifier used as the Basic-auth user name.
    #[must_use]
    pub fn business_id(&self) -> &str {
        &self.business_id
    }

    /// Secret key used as the Basic-auth password.
    #[must_use]
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Resolved base URL; always ends with `/`.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether the sandbox environment was requested.
    #[must_use]
    pub const fn is_sandbox(&self) -> bool {
        self.sandbox
    }

    /// Per-request timeout applied by the production transport.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// API version segment (e.g. `v1`).
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("business_id", &self.business_id)
            .field("secret_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("sandbox", &self.sandbox)
            .field("timeout", &self.timeout)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl fmt::Display for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ClientConfig {{ business_id: {}, base_url: {}, sandbox: {}, timeout: {}s, api_version: {} }}",
            self.business_id,
            self.base_url,
            self.sandbox,
            self.timeout.as_secs(),
            self.api_version,
        )
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone)]
#[must_use]
pub struct ClientConfigBuilder {
    business_id: String,
    secret_key: String,
    base_url: Option<String>,
    sandbox: bool,
    timeout: Duration,
    api_version: String,
}

impl ClientConfigBuilder {
    /// Selects the sandbox host when no explicit base URL is given.
    pub const fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Overrides the base URL. A blank string leaves the default in place.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = (!base_url.trim().is_empty()).then_some(base_url);
        self
    }

    /// Sets the per-request timeout.
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the API version used to form the default base URL.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Validates the settings and resolves the base URL.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidUrl`] if the base URL does not parse or cannot
    ///   carry relative paths (e.g. `mailto:`), or the API version is blank
    /// - [`ConfigError::InvalidTimeout`] if the timeout is zero
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                reason: "timeout must be greater than zero".to_string(),
            });
        }

        let api_version = self.api_version.trim().trim_matches('/').to_string();
        if api_version.is_empty() {
            return Err(ConfigError::InvalidUrl {
                url: self.api_version,
                reason: "API version must not be empty".to_string(),
            });
        }

        let raw = self
            .base_url
            .unwrap_or_else(|| defaults::base_url(self.sandbox, &api_version));
        let base_url = normalize_base_url(&raw)?;

        Ok(ClientConfig {
            business_id: self.business_id,
            secret_key: self.secret_key,
            base_url,
            sandbox: self.sandbox,
            timeout: self.timeout,
            api_version,
        })
    }
}

/// Parses a base URL and guarantees a trailing slash so that relative
/// resolution appends to the last segment instead of replacing it.
fn normalize_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: "URL cannot be used as a base for API paths".to_string(),
        });
    }

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}
