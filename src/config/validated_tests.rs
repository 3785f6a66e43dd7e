//! Tests for merging CLI, environment and TOML sources.

use std::collections::HashMap;
use std::time::Duration;

use super::cli::Cli;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;
use super::validated::{ValidatedConfig, write_default_config};

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

fn no_env() -> impl Fn(&str) -> Option<String> {
    |_| None
}

fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["swervpay"];
    argv.extend_from_slice(args);
    argv.push("business");
    Cli::parse_from_iter(argv)
}

fn toml_with_credentials() -> TomlConfig {
    TomlConfig::parse(
        r#"
        [credentials]
        business_id = "bus_toml"
        secret_key = "sk_toml"
        "#,
    )
    .unwrap()
}

mod credentials {
    use super::*;

    #[test]
    fn missing_business_id_is_reported() {
        let err = ValidatedConfig::from_sources(&cli(&[]), no_env(), None).unwrap_err();

        assert!(matches!(
            err,
            ConfigError::MissingRequired { field: f, .. } if f == field::BUSINESS_ID
        ));
    }

    #[test]
    fn missing_secret_key_is_reported() {
        let err = ValidatedConfig::from_sources(&cli(&["--business-id", "bus_cli"]), no_env(), None)
            .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::MissingRequired { field: f, .. } if f == field::SECRET_KEY
        ));
    }

    #[test]
    fn toml_credentials_are_used() {
        let toml = toml_with_credentials();
        let config = ValidatedConfig::from_sources(&cli(&[]), no_env(), Some(&toml)).unwrap();

        assert_eq!(config.client.business_id(), "bus_toml");
        assert_eq!(config.client.secret_key(), "sk_toml");
    }

    #[test]
    fn env_beats_toml() {
        let toml = toml_with_credentials();
        let env = env_of(&[
            ("SWERVPAY_BUSINESS_ID", "bus_env"),
            ("SWERVPAY_SECRET_KEY", "sk_env"),
        ]);

        let config = ValidatedConfig::from_sources(&cli(&[]), env, Some(&toml)).unwrap();

        assert_eq!(config.client.business_id(), "bus_env");
        assert_eq!(config.client.secret_key(), "sk_env");
    }

    #[test]
    fn cli_beats_env() {
        let env = env_of(&[
            ("SWERVPAY_BUSINESS_ID", "bus_env"),
            ("SWERVPAY_SECRET_KEY", "sk_env"),
        ]);

        let config =
            ValidatedConfig::from_sources(&cli(&["--business-id", "bus_cli"]), env, None).unwrap();

        assert_eq!(config.client.business_id(), "bus_cli");
        assert_eq!(config.client.secret_key(), "sk_env");
    }

    #[test]
    fn empty_env_counts_as_unset() {
        let toml = toml_with_credentials();
        let env = env_of(&[("SWERVPAY_BUSINESS_ID", "")]);

        let config = ValidatedConfig::from_sources(&cli(&[]), env, Some(&toml)).unwrap();

        assert_eq!(config.client.business_id(), "bus_toml");
    }
}

mod connection {
    use super::*;

    #[test]
    fn sandbox_from_env() {
        let toml = toml_with_credentials();
        let env = env_of(&[("SWERVPAY_SANDBOX", "yes")]);

        let config = ValidatedConfig::from_sources(&cli(&[]), env, Some(&toml)).unwrap();

        assert!(config.client.is_sandbox());
        assert_eq!(
            config.client.base_url().as_str(),
            "https://sandbox.swervpay.co/api/v1/"
        );
    }

    #[test]
    fn invalid_sandbox_env_is_rejected() {
        let toml = toml_with_credentials();
        let env = env_of(&[("SWERVPAY_SANDBOX", "maybe")]);

        let err = ValidatedConfig::from_sources(&cli(&[]), env, Some(&toml)).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidBool { .. }));
    }

    #[test]
    fn sandbox_flag_overrides_file() {
        let toml = TomlConfig::parse(
            r#"
            [credentials]
            business_id = "b"
            secret_key = "s"
            [client]
            sandbox = false
            "#,
        )
        .unwrap();

        let config =
            ValidatedConfig::from_sources(&cli(&["--sandbox"]), no_env(), Some(&toml)).unwrap();

        assert!(config.client.is_sandbox());
    }

    #[test]
    fn base_url_precedence() {
        let toml = TomlConfig::parse(
            r#"
            [credentials]
            business_id = "b"
            secret_key = "s"
            [client]
            base_url = "http://file.local/api/v1"
            "#,
        )
        .unwrap();
        let env = env_of(&[("SWERVPAY_BASE_URL", "http://env.local/api/v1")]);

        let from_env = ValidatedConfig::from_sources(&cli(&[]), env, Some(&toml)).unwrap();
        assert_eq!(from_env.client.base_url().as_str(), "http://env.local/api/v1/");

        let from_file = ValidatedConfig::from_sources(&cli(&[]), no_env(), Some(&toml)).unwrap();
        assert_eq!(from_file.client.base_url().as_str(), "http://file.local/api/v1/");

        let from_cli = ValidatedConfig::from_sources(
            &cli(&["--base-url", "http://cli.local/api/v1"]),
            no_env(),
            Some(&toml),
        )
        .unwrap();
        assert_eq!(from_cli.client.base_url().as_str(), "http://cli.local/api/v1/");
    }

    #[test]
    fn timeout_and_version_from_file() {
        let toml = TomlConfig::parse(
            r#"
            [credentials]
            business_id = "b"
            secret_key = "s"
            [client]
            timeout = 5
            api_version = "v2"
            "#,
        )
        .unwrap();

        let config = ValidatedConfig::from_sources(&cli(&[]), no_env(), Some(&toml)).unwrap();

        assert_eq!(config.client.timeout(), Duration::from_secs(5));
        assert_eq!(config.client.base_url().as_str(), "https://api.swervpay.co/api/v2/");
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let toml = TomlConfig::parse(
            r#"
            [credentials]
            business_id = "b"
            secret_key = "s"
            [client]
            timeout = 0
            "#,
        )
        .unwrap();

        let err = ValidatedConfig::from_sources(&cli(&[]), no_env(), Some(&toml)).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
    }

    #[test]
    fn verbose_is_carried() {
        let toml = toml_with_credentials();
        let config = ValidatedConfig::from_sources(&cli(&["-v"]), no_env(), Some(&toml)).unwrap();

        assert!(config.verbose);
    }
}

mod loading {
    use super::*;

    #[test]
    fn load_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swervpay.toml");
        std::fs::write(
            &path,
            "[credentials]\nbusiness_id = \"bus_file\"\nsecret_key = \"sk_file\"\n",
        )
        .unwrap();
        let path_str = path.to_str().unwrap();

        let config = ValidatedConfig::load(&cli(&[
            "--config",
            path_str,
            "--business-id",
            "bus_cli",
            "--secret-key",
            "sk_cli",
        ]))
        .unwrap();

        assert_eq!(config.client.business_id(), "bus_cli");
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = ValidatedConfig::load(&cli(&["--config", path.to_str().unwrap()])).unwrap_err();

        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn write_default_config_creates_parsable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swervpay.toml");

        write_default_config(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(TomlConfig::parse(&written).is_ok());
    }

    #[test]
    fn write_default_config_reports_bad_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("swervpay.toml");

        let err = write_default_config(&path).unwrap_err();

        assert!(matches!(err, ConfigError::FileWrite { .. }));
    }
}
