//! Validation tests for base URL and timeout values.

use crate::constants::MAX_TIMEOUT_SECS;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use std::time::Duration;

#[test]
fn test_timeout_zero_invalid() {
    let result = ConfigLoader::new()
        .with_timeout(Duration::from_secs(0))
        .build();

    match result {
        Err(ConfigError::InvalidTimeout { message }) => {
            assert!(message.contains("must be greater than 0"), "got: {}", message);
        }
        other => panic!("Expected InvalidTimeout, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_timeout_exceeds_max_invalid() {
    let result = ConfigLoader::new()
        .with_timeout(Duration::from_secs(MAX_TIMEOUT_SECS + 1))
        .build();

    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_timeout_at_max_valid() {
    let result = ConfigLoader::new()
        .with_timeout(Duration::from_secs(MAX_TIMEOUT_SECS))
        .build();

    assert!(result.is_ok());
}

#[test]
fn test_base_url_not_a_url() {
    let result = ConfigLoader::new()
        .with_base_url("not a url".to_string())
        .build();

    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue { ref var, .. }) if var == "base_url"
    ));
}

#[test]
fn test_base_url_wrong_scheme() {
    let result = ConfigLoader::new()
        .with_base_url("ftp://localhost:3000".to_string())
        .build();

    match result {
        Err(ConfigError::InvalidValue { message, .. }) => {
            assert!(message.contains("scheme must be http or https"));
        }
        other => panic!("Expected InvalidValue, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_base_url_blank() {
    let result = ConfigLoader::new().with_base_url("   ".to_string()).build();

    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_base_url_with_query_or_fragment_invalid() {
    for url in ["http://127.0.0.1:1/?org=2", "http://grafana:3000/grafana#panel"] {
        let result = ConfigLoader::new().with_base_url(url.to_string()).build();

        match result {
            Err(ConfigError::InvalidValue { var, message }) => {
                assert_eq!(var, "base_url");
                assert!(message.contains("query string or fragment"), "got: {}", message);
            }
            other => panic!("Expected InvalidValue for {}, got {:?}", url, other.map(|_| ())),
        }
    }
}
