//! Constants for endpoint paths, credentials and environment keys
//!
//! This module defines string constants used by the client and the
//! configuration loader.

/// Endpoint path constants
pub mod path {
    /// Collection path for the sentence resource
    pub const SENTENCES: &str = "/api/sentences";
}

/// Default basic-auth credentials for non-production environments
pub mod credentials {
    /// Basic-auth username
    pub const USERNAME: &str = "user";

    /// Basic-auth password
    pub const PASSWORD: &str = "pass";
}

/// Environment variable names read by `Config::from_env`
pub mod env {
    pub const CONFIG_PATH: &str = "CONFIG_PATH";
    pub const BASE_URL: &str = "BASE_URL";
    pub const APP_ENV: &str = "APP_ENV";
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    pub const REQUEST_TIMEOUT: &str = "REQUEST_TIMEOUT";
    pub const BASIC_AUTH_USER: &str = "BASIC_AUTH_USER";
    pub const BASIC_AUTH_PASS: &str = "BASIC_AUTH_PASS";
}

/// Environment mode names
pub mod mode {
    pub const PRODUCTION: &str = "production";
    pub const DEVELOPMENT: &str = "development";
    pub const TEST: &str = "test";
}
