//! Client configuration management
//!
//! This module loads and validates configuration from a TOML file or from
//! environment variables. All values are validated up front so a misconfigured
//! client fails before it issues any request.

use crate::core::constants::env;
use crate::core::request::{BasicAuth, Environment};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct ClientSection {
    #[serde(default)]
    pub request_timeout: Option<u64>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ClientSection {
    fn default() -> Self {
        Self {
            request_timeout: None,
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_environment() -> String {
    Environment::default().to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    pub base_url: String,
    #[serde(default = "default_environment")]
    pub environment: String,
    #[serde(default)]
    pub client: ClientSection,
    #[serde(default)]
    pub auth: BasicAuth,
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server root URL, e.g. `http://localhost:8080`
    pub base_url: String,

    /// Deployment mode; decides whether credentials are attached
    pub environment: Environment,

    /// Credentials sent outside production
    pub credentials: BasicAuth,

    /// Request timeout in seconds; `None` keeps the transport default
    pub request_timeout: Option<u64>,

    /// Logging level
    pub log_level: String,
}

impl Config {
    /// Create a configuration for `base_url` with every other value defaulted
    pub fn new(base_url: impl Into<String>, environment: Environment) -> Self {
        Self {
            base_url: base_url.into(),
            environment,
            credentials: BasicAuth::default(),
            request_timeout: None,
            log_level: default_log_level(),
        }
    }

    /// Load configuration from TOML file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The TOML file cannot be read or parsed
    /// - `base_url` is missing or not an absolute URL
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read configuration file")?;

        let config: TomlConfig =
            toml::from_str(&content).context("Failed to parse TOML configuration")?;

        let config = Config {
            base_url: config.base_url,
            environment: Environment::parse(&config.environment),
            credentials: config.auth,
            request_timeout: config.client.request_timeout,
            log_level: config.client.log_level,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the process environment
    ///
    /// A `.env` file in the working directory is loaded first if present. When
    /// `CONFIG_PATH` is set the TOML file it names is used instead.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        if let Ok(path) = std::env::var(env::CONFIG_PATH) {
            return Self::from_file(path);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from a key lookup function
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(env::BASE_URL)
            .with_context(|| format!("{} must be set", env::BASE_URL))?;

        let environment = lookup(env::APP_ENV)
            .map(|s| Environment::parse(&s))
            .unwrap_or_default();

        let request_timeout = match lookup(env::REQUEST_TIMEOUT) {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("Invalid {} value: {}", env::REQUEST_TIMEOUT, raw))?,
            ),
            None => None,
        };

        let defaults = BasicAuth::default();
        let credentials = BasicAuth {
            username: lookup(env::BASIC_AUTH_USER).unwrap_or(defaults.username),
            password: lookup(env::BASIC_AUTH_PASS).unwrap_or(defaults.password),
        };

        let config = Config {
            base_url,
            environment,
            credentials,
            request_timeout,
            log_level: lookup(env::LOG_LEVEL).unwrap_or_else(default_log_level),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the base URL is an absolute http(s) URL and the timeout is non-zero
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            bail!("base_url must not be empty");
        }
        let url = reqwest::Url::parse(&self.base_url)
            .with_context(|| format!("Invalid base_url: {}", self.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("base_url must use http or https: {}", self.base_url);
        }
        if self.request_timeout == Some(0) {
            bail!("request_timeout must be greater than zero");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file.flush().unwrap();
        file
    }

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
            base_url = "http://api.test"
            environment = "production"

            [client]
            request_timeout = 15
            log_level = "debug"

            [auth]
            username = "alice"
            password = "secret"
        "#,
        );
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "http://api.test");
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.request_timeout, Some(15));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.credentials.username, "alice");
        assert_eq!(config.credentials.password, "secret");
    }

    #[test]
    fn test_load_minimal_config_uses_defaults() {
        let file = write_config(r#"base_url = "http://localhost:8080""#);
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.credentials, BasicAuth::default());
    }

    #[test]
    fn test_missing_base_url_is_rejected() {
        let file = write_config(r#"environment = "test""#);
        assert!(Config::from_file(file.path()).is_err());
    }

    #[test]
    fn test_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            ("BASE_URL", "https://sentences.example.com"),
            ("APP_ENV", "Production"),
            ("REQUEST_TIMEOUT", "5"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://sentences.example.com");
        assert!(config.environment.is_production());
        assert_eq!(config.request_timeout, Some(5));
        assert_eq!(config.credentials, BasicAuth::default());
    }

    #[test]
    fn test_from_lookup_defaults_to_development() {
        let config = Config::from_lookup(lookup_from(&[("BASE_URL", "http://api.test")])).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_from_lookup_requires_base_url() {
        assert!(Config::from_lookup(lookup_from(&[("APP_ENV", "test")])).is_err());
    }

    #[test]
    fn test_from_lookup_rejects_bad_timeout() {
        let result = Config::from_lookup(lookup_from(&[
            ("BASE_URL", "http://api.test"),
            ("REQUEST_TIMEOUT", "soon"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate() {
        assert!(Config::new("http://api.test", Environment::Test).validate().is_ok());
        assert!(Config::new("", Environment::Test).validate().is_err());
        assert!(Config::new("api.test", Environment::Test).validate().is_err());
        assert!(Config::new("ftp://api.test", Environment::Test).validate().is_err());

        let mut config = Config::new("http://api.test", Environment::Test);
        config.request_timeout = Some(0);
        assert!(config.validate().is_err());
    }
}
