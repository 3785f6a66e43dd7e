//! Default values for configuration options.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

use std::time::Duration;

/// Default API version segment.
pub const API_VERSION: &str = "v1";

/// Production API host; the version segment is appended.
pub const PRODUCTION_HOST: &str = "https://api.swervpay.co/api/";

/// Sandbox API host; the version segment is appended.
pub const SANDBOX_HOST: &str = "https://sandbox.swervpay.co/api/";

/// Default request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 30;

/// Default config file name written by `swervpay init`.
pub const CONFIG_FILE: &str = "swervpay.toml";

/// Environment variable holding the business ID.
pub const ENV_BUSINESS_ID: &str = "SWERVPAY_BUSINESS_ID";

/// Environment variable holding the secret key.
pub const ENV_SECRET_KEY: &str = "SWERVPAY_SECRET_KEY";

/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "SWERVPAY_BASE_URL";

/// Environment variable enabling the sandbox host.
pub const ENV_SANDBOX: &str = "SWERVPAY_SANDBOX";

/// Default request timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}

/// Returns the default base URL string for the given environment and version.
#[must_use]
pub fn base_url(sandbox: bool, api_version: &str) -> String {
    let host = if sandbox { SANDBOX_HOST } else { PRODUCTION_HOST };
    format!("{host}{api_version}/")
}
