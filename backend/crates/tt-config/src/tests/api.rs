use crate::ApiConfig;

use std::time::Duration;

#[test]
fn test_default_api_config() {
    let config = ApiConfig::default();
    assert_eq!(config.base_url, crate::DEFAULT_API_URL);
    assert!(config.timeout().is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_timeout_converts_to_duration() {
    let config = ApiConfig {
        timeout_secs: Some(20),
        ..Default::default()
    };
    assert_eq!(config.timeout(), Some(Duration::from_secs(20)));
}

#[test]
fn test_empty_base_url_rejected() {
    let config = ApiConfig {
        base_url: String::from("  "),
        ..Default::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("must not be empty"));
}

#[test]
fn test_base_url_without_scheme_rejected() {
    let config = ApiConfig {
        base_url: String::from("api.taxtrack.example"),
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_https_base_url_accepted() {
    let config = ApiConfig {
        base_url: String::from("https://api.taxtrack.example/v1"),
        ..Default::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_zero_timeout_rejected() {
    let config = ApiConfig {
        timeout_secs: Some(0),
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_timeout_above_max_rejected() {
    let config = ApiConfig {
        timeout_secs: Some(crate::MAX_TIMEOUT_SECS + 1),
        ..Default::default()
    };
    assert!(config.validate().is_err());
}
