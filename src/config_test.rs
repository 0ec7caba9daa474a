//! Tests for configuration resolution.
//!
//! These mutate process environment variables, so they are serialized.

use serial_test::serial;

use crate::config::{API_TOKEN_ENV, API_URL_ENV, Config, ConfigError};

fn clear_env() {
    unsafe {
        std::env::remove_var(API_URL_ENV);
        std::env::remove_var(API_TOKEN_ENV);
    }
}

#[test]
#[serial]
fn test_resolve_with_explicit_values() {
    clear_env();

    let config = Config::resolve(
        Some("https://engine.example.com".to_string()),
        Some("secret".to_string()),
    )
    .unwrap();

    assert_eq!(config.api_url, "https://engine.example.com");
    assert_eq!(config.api_token, "secret");
}

#[test]
#[serial]
fn test_resolve_trims_trailing_slash() {
    clear_env();

    let config = Config::resolve(
        Some("https://engine.example.com/".to_string()),
        Some("secret".to_string()),
    )
    .unwrap();

    assert_eq!(config.api_url, "https://engine.example.com");
}

#[test]
#[serial]
fn test_resolve_reads_environment() {
    clear_env();
    unsafe {
        std::env::set_var(API_URL_ENV, "https://env.example.com");
        std::env::set_var(API_TOKEN_ENV, "env-token");
    }

    let config = Config::resolve(None, None).unwrap();

    assert_eq!(config.api_url, "https://env.example.com");
    assert_eq!(config.api_token, "env-token");

    clear_env();
}

#[test]
#[serial]
fn test_explicit_values_win_over_environment() {
    clear_env();
    unsafe {
        std::env::set_var(API_URL_ENV, "https://env.example.com");
        std::env::set_var(API_TOKEN_ENV, "env-token");
    }

    let config = Config::resolve(
        Some("https://flag.example.com".to_string()),
        Some("flag-token".to_string()),
    )
    .unwrap();

    assert_eq!(config.api_url, "https://flag.example.com");
    assert_eq!(config.api_token, "flag-token");

    clear_env();
}

#[test]
#[serial]
fn test_missing_url_is_an_error() {
    clear_env();

    let result = Config::resolve(None, Some("secret".to_string()));
    assert!(matches!(result, Err(ConfigError::MissingApiUrl)));
}

#[test]
#[serial]
fn test_missing_token_is_an_error() {
    clear_env();

    let result = Config::resolve(Some("https://engine.example.com".to_string()), None);
    assert!(matches!(result, Err(ConfigError::MissingApiToken)));
}
