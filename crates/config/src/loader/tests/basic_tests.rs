//! Builder method and auth resolution tests.

use crate::constants::DEFAULT_BASE_URL;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::AuthStrategy;
use secrecy::ExposeSecret;
use std::time::Duration;

#[test]
fn test_defaults_are_anonymous_on_default_url() {
    let config = ConfigLoader::new().build().unwrap();

    assert_eq!(config.connection.base_url, DEFAULT_BASE_URL);
    assert!(matches!(config.auth.strategy, AuthStrategy::Anonymous));
    assert!(!config.connection.skip_verify);
    assert!(config.connection.timeout.is_none());
}

#[test]
fn test_base_url_trailing_slash_stripped() {
    let config = ConfigLoader::new()
        .with_base_url("http://localhost:3001/".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.base_url, "http://localhost:3001");
}

#[test]
fn test_base_url_with_sub_path_preserved() {
    let config = ConfigLoader::new()
        .with_base_url("https://example.com/grafana/".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.base_url, "https://example.com/grafana");
}

#[test]
fn test_api_token_takes_precedence() {
    let config = ConfigLoader::new()
        .with_api_token("token-123".to_string())
        .with_username("admin".to_string())
        .with_password("secret".to_string())
        .with_credential("other:pair".to_string())
        .build()
        .unwrap();

    match config.auth.strategy {
        AuthStrategy::ApiToken { token } => assert_eq!(token.expose_secret(), "token-123"),
        other => panic!("Expected ApiToken, got {:?}", other),
    }
}

#[test]
fn test_username_password_beat_credential() {
    let config = ConfigLoader::new()
        .with_username("admin".to_string())
        .with_password("secret".to_string())
        .with_credential("token-from-credential".to_string())
        .build()
        .unwrap();

    assert!(matches!(
        config.auth.strategy,
        AuthStrategy::BasicAuth { ref username, .. } if username == "admin"
    ));
}

#[test]
fn test_credential_selects_basic_auth() {
    let config = ConfigLoader::new()
        .with_credential("admin:prom-operator".to_string())
        .build()
        .unwrap();

    match config.auth.strategy {
        AuthStrategy::BasicAuth { username, password } => {
            assert_eq!(username, "admin");
            assert_eq!(password.expose_secret(), "prom-operator");
        }
        other => panic!("Expected BasicAuth, got {:?}", other),
    }
}

#[test]
fn test_invalid_credential_rejected() {
    let result = ConfigLoader::new()
        .with_credential("a:b:c".to_string())
        .build();

    assert!(matches!(result, Err(ConfigError::InvalidCredential(_))));
}

#[test]
fn test_username_without_password_rejected() {
    let result = ConfigLoader::new()
        .with_username("admin".to_string())
        .build();

    assert!(matches!(
        result,
        Err(ConfigError::IncompleteBasicAuth {
            missing: "password"
        })
    ));
}

#[test]
fn test_password_without_username_rejected() {
    let result = ConfigLoader::new()
        .with_password("secret".to_string())
        .build();

    assert!(matches!(
        result,
        Err(ConfigError::IncompleteBasicAuth {
            missing: "username"
        })
    ));
}

#[test]
fn test_skip_verify_and_timeout_carried() {
    let config = ConfigLoader::new()
        .with_skip_verify(true)
        .with_timeout(Duration::from_secs(15))
        .build()
        .unwrap();

    assert!(config.connection.skip_verify);
    assert_eq!(config.connection.timeout, Some(Duration::from_secs(15)));
}
