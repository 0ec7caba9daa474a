use std::env;

use miette::Diagnostic;
use thiserror::Error;

/// Environment variable naming the Document Engine base URL.
pub const API_URL_ENV: &str = "DOCBRIDGE_API_URL";

/// Environment variable naming the Document Engine API token.
pub const API_TOKEN_ENV: &str = "DOCBRIDGE_API_TOKEN";

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("No Document Engine URL configured")]
    #[diagnostic(
        code(docbridge::config::missing_api_url),
        help(
            "Pass --api-url or set the DOCBRIDGE_API_URL environment variable, e.g. https://engine.example.com"
        )
    )]
    MissingApiUrl,

    #[error("No Document Engine API token configured")]
    #[diagnostic(
        code(docbridge::config::missing_api_token),
        help("Pass --api-token or set the DOCBRIDGE_API_TOKEN environment variable")
    )]
    MissingApiToken,
}

/// Connection settings for the Document Engine backend.
///
/// Resolved once at startup and passed into
/// [`DocumentEngineClient::new`](crate::backend::DocumentEngineClient::new);
/// nothing reads the environment after that point.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_token: String,
}

impl Config {
    /// Resolve configuration from CLI overrides and the environment.
    ///
    /// Priority for both values:
    /// 1. Explicit CLI flag
    /// 2. Environment variable (`DOCBRIDGE_API_URL` / `DOCBRIDGE_API_TOKEN`)
    ///
    /// Missing either value is an error; the binary turns it into a fatal
    /// startup diagnostic.
    pub fn resolve(
        api_url: Option<String>,
        api_token: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_url = api_url
            .or_else(|| env::var(API_URL_ENV).ok())
            .ok_or(ConfigError::MissingApiUrl)?;

        let api_token = api_token
            .or_else(|| env::var(API_TOKEN_ENV).ok())
            .ok_or(ConfigError::MissingApiToken)?;

        Ok(Self {
            // Trailing slash would double up when joining request paths.
            api_url: api_url.trim_end_matches('/').to_string(),
            api_token,
        })
    }
}
