//! Tests for `ClientConfig` construction and base URL resolution.

use std::time::Duration;

use super::client::ClientConfig;
use super::error::ConfigError;

mod base_url {
    use super::*;

    #[test]
    fn production_is_default() {
        let config = ClientConfig::builder("bus_1", "sk_1").build().unwrap();

        assert_eq!(config.base_url().as_str(), "https://api.swervpay.co/api/v1/");
        assert!(!config.is_sandbox());
    }

    #[test]
    fn sandbox_selects_sandbox_host() {
        let config = ClientConfig::builder("bus_1", "sk_1")
            .with_sandbox(true)
            .build()
            .unwrap();

        assert_eq!(
            config.base_url().as_str(),
            "https://sandbox.swervpay.co/api/v1/"
        );
    }

    #[test]
    fn api_version_is_part_of_default_url() {
        let config = ClientConfig::builder("bus_1", "sk_1")
            .with_api_version("/v2/")
            .build()
            .unwrap();

        assert_eq!(config.api_version(), "v2");
        assert_eq!(config.base_url().as_str(), "https://api.swervpay.co/api/v2/");
    }

    #[test]
    fn explicit_url_wins_over_sandbox() {
        let config = ClientConfig::builder("bus_1", "sk_1")
            .with_sandbox(true)
            .with_base_url("http://127.0.0.1:4010/api/v1/")
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_str(), "http://127.0.0.1:4010/api/v1/");
        assert!(config.is_sandbox());
    }

    #[test]
    fn explicit_url_gains_trailing_slash() {
        let config = ClientConfig::builder("bus_1", "sk_1")
            .with_base_url("https://api.swervpay.co/v1")
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_str(), "https://api.swervpay.co/v1/");
        assert_eq!(
            config.base_url().join("customers").unwrap().as_str(),
            "https://api.swervpay.co/v1/customers"
        );
    }

    #[test]
    fn blank_url_falls_back_to_default() {
        let config = ClientConfig::builder("bus_1", "sk_1")
            .with_base_url("  ")
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_str(), "https://api.swervpay.co/api/v1/");
    }

    #[test]
    fn query_and_fragment_are_dropped() {
        let config = ClientConfig::builder("bus_1", "sk_1")
            .with_base_url("https://example.com/api/v1/?debug=1#top")
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_str(), "https://example.com/api/v1/");
    }

    #[test]
    fn malformed_url_is_rejected() {
        let result = ClientConfig::builder("bus_1", "sk_1")
            .with_base_url("not a url")
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn non_base_url_is_rejected() {
        let result = ClientConfig::builder("bus_1", "sk_1")
            .with_base_url("mailto:ops@example.com")
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn blank_api_version_is_rejected() {
        let result = ClientConfig::builder("bus_1", "sk_1")
            .with_api_version(" ")
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }
}

mod settings {
    use super::*;

    #[test]
    fn defaults_are_applied() {
        let config = ClientConfig::builder("bus_1", "sk_1").build().unwrap();

        assert_eq!(config.business_id(), "bus_1");
        assert_eq!(config.secret_key(), "sk_1");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.api_version(), "v1");
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result = ClientConfig::builder("bus_1", "sk_1")
            .with_timeout(Duration::ZERO)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
    }

    #[test]
    fn debug_redacts_secret_key() {
        let config = ClientConfig::builder("bus_1", "sk_live_secret").build().unwrap();
        let debug = format!("{config:?}");

        assert!(debug.contains("bus_1"));
        assert!(!debug.contains("sk_live_secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn display_omits_secret_key() {
        let config = ClientConfig::builder("bus_1", "sk_live_secret").build().unwrap();
        let display = config.to_string();

        assert!(display.contains("https://api.swervpay.co/api/v1/"));
        assert!(!display.contains("sk_live_secret"));
    }
}
