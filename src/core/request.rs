//! Per-request configuration
//!
//! Every outbound request is given a freshly built [`RequestConfig`]. Outside
//! production it carries basic-auth credentials; in production it carries none.

use crate::core::constants::{credentials, mode};
use serde::Deserialize;
use std::fmt;

/// Deployment mode the client runs under
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Environment {
    Production,
    #[default]
    Development,
    Test,
    Other(String),
}

impl Environment {
    /// Parse an environment name. Matching is case-insensitive and never fails:
    /// unknown names are kept as [`Environment::Other`].
    pub fn parse(s: &str) -> Self {
        let name = s.trim().to_lowercase();
        match name.as_str() {
            "production" | "prod" => Environment::Production,
            "development" | "dev" | "" => Environment::Development,
            "test" => Environment::Test,
            _ => Environment::Other(name),
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => f.write_str(mode::PRODUCTION),
            Environment::Development => f.write_str(mode::DEVELOPMENT),
            Environment::Test => f.write_str(mode::TEST),
            Environment::Other(name) => f.write_str(name),
        }
    }
}

/// Basic-auth credentials
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct BasicAuth {
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_password")]
    pub password: String,
}

fn default_username() -> String {
    credentials::USERNAME.to_string()
}

fn default_password() -> String {
    credentials::PASSWORD.to_string()
}

impl Default for BasicAuth {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
        }
    }
}

// Keep the password out of debug output and logs.
impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Options attached to a single request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestConfig {
    pub auth: Option<BasicAuth>,
}

/// Build the request configuration for `environment`.
///
/// Called once per request, so a client never reuses a stale config.
pub fn request_config(environment: &Environment, credentials: &BasicAuth) -> RequestConfig {
    if environment.is_production() {
        RequestConfig::default()
    } else {
        RequestConfig {
            auth: Some(credentials.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_environment() {
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse("PROD"), Environment::Production);
        assert_eq!(Environment::parse(" Development "), Environment::Development);
        assert_eq!(Environment::parse(""), Environment::Development);
        assert_eq!(Environment::parse("test"), Environment::Test);
        assert_eq!(
            Environment::parse("Staging"),
            Environment::Other("staging".to_string())
        );
    }

    #[test]
    fn test_environment_display() {
        assert_eq!(Environment::Production.to_string(), "production");
        assert_eq!(Environment::Other("staging".into()).to_string(), "staging");
    }

    #[test]
    fn test_non_production_attaches_default_credentials() {
        for env in [
            Environment::Development,
            Environment::Test,
            Environment::Other("staging".to_string()),
        ] {
            let config = request_config(&env, &BasicAuth::default());
            let auth = config.auth.expect("auth should be attached");
            assert_eq!(auth.username, "user");
            assert_eq!(auth.password, "pass");
        }
    }

    #[test]
    fn test_production_attaches_no_credentials() {
        let config = request_config(&Environment::Production, &BasicAuth::default());
        assert!(config.auth.is_none());
    }

    #[test]
    fn test_debug_masks_password() {
        let rendered = format!("{:?}", BasicAuth::default());
        assert!(rendered.contains("user"));
        assert!(!rendered.contains("\"pass\""));
    }
}
