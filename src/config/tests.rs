//! Configuration tests
//!
//! The template written by `to_toml` must always parse back into the file
//! layer, and the env > file > default precedence must hold per field.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let toml_str = Config::default().to_toml();

    let parsed = Config::parse_file_config(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

#[test]
fn test_config_roundtrip_preserves_values() {
    let mut config = Config::default();
    config.api_url = "https://api.vidlancing.example/v2".to_string();
    config.request_timeout_secs = Some(15);
    config.date_format = "%d/%m/%Y".to_string();
    config.theme = "light".to_string();
    config.credentials.source = CredentialSource::Env;
    config.credentials.env_var = "MY_TOKEN".to_string();
    config.credentials.file = PathBuf::from(r"C:\Users\me\creds.toml");
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let file = Config::parse_file_config(&config.to_toml()).unwrap();
    let reloaded = Config::resolve(file, no_env).unwrap();

    assert_eq!(reloaded.api_url, config.api_url);
    assert_eq!(reloaded.request_timeout_secs, Some(15));
    assert_eq!(reloaded.date_format, "%d/%m/%Y");
    assert_eq!(reloaded.theme, "light");
    assert_eq!(reloaded.credentials.source, CredentialSource::Env);
    assert_eq!(reloaded.credentials.env_var, "MY_TOKEN");
    assert!(reloaded.logging.file_enabled);
    assert_eq!(reloaded.logging.file_rotation, LogRotation::Hourly);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_defaults_when_file_is_empty() {
    let config = Config::resolve(FileConfig::default(), no_env).unwrap();
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.request_timeout(), None);
    assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
    assert!(config.enable_tui);
    assert_eq!(config.credentials.source, CredentialSource::File);
    assert_eq!(config.credentials.key, "token");
}

#[test]
fn test_env_overrides_file() {
    let file = Config::parse_file_config(
        r#"
api_url = "https://from-file.example"
theme = "light"
request_timeout_secs = 5
"#,
    )
    .unwrap();

    let env = env_from(&[
        ("VIDLANCING_API_URL", "https://from-env.example"),
        ("VIDLANCING_TIMEOUT_SECS", "9"),
        ("VIDLANCING_NO_TUI", "1"),
    ]);
    let config = Config::resolve(file, env).unwrap();

    assert_eq!(config.api_url, "https://from-env.example");
    assert_eq!(config.theme, "light");
    assert_eq!(config.request_timeout(), Some(Duration::from_secs(9)));
    assert!(!config.enable_tui);
}

#[test]
fn test_zero_timeout_means_none() {
    let file = Config::parse_file_config("request_timeout_secs = 0").unwrap();
    let config = Config::resolve(file, no_env).unwrap();
    assert_eq!(config.request_timeout_secs, None);
}

#[test]
fn test_invalid_timeout_env_is_an_error() {
    let env = env_from(&[("VIDLANCING_TIMEOUT_SECS", "soon")]);
    assert!(Config::resolve(FileConfig::default(), env).is_err());
}

#[test]
fn test_unknown_keys_are_rejected() {
    assert!(Config::parse_file_config("api_urll = \"typo\"").is_err());
    assert!(Config::parse_file_config("[logging]\nlvl = \"debug\"").is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// Sections
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_credential_paths_resolve_against_config_dir() {
    let dir = PathBuf::from("/home/me/.config/vidlancing");

    let relative = CredentialsConfig::from_file(
        Some(FileCredentials {
            file: Some("secrets/creds.toml".to_string()),
            ..Default::default()
        }),
        Some(dir.clone()),
    );
    assert_eq!(relative.file, dir.join("secrets/creds.toml"));

    let default = CredentialsConfig::from_file(None, Some(dir.clone()));
    assert_eq!(default.file, dir.join("credentials.toml"));
}

#[test]
fn test_credential_source_parsing() {
    assert_eq!(CredentialSource::from_str("ENV"), CredentialSource::Env);
    assert_eq!(CredentialSource::from_str("file"), CredentialSource::File);
    assert_eq!(CredentialSource::from_str("vault"), CredentialSource::File);
}

#[test]
fn test_log_rotation_parsing() {
    assert_eq!(LogRotation::from_str("hourly"), LogRotation::Hourly);
    assert_eq!(LogRotation::from_str("NEVER"), LogRotation::Never);
    assert_eq!(LogRotation::from_str("weekly"), LogRotation::Daily);
}

#[test]
fn test_logging_from_file() {
    let logging = LoggingConfig::from_file(Some(FileLogging {
        level: Some("debug".to_string()),
        file_prefix: Some("profile".to_string()),
        ..Default::default()
    }));
    assert_eq!(logging.level, "debug");
    assert_eq!(logging.file_prefix, "profile");
    assert!(!logging.file_enabled);
}

#[test]
fn test_logging_blank_values_keep_defaults() {
    let logging = LoggingConfig::from_file(Some(FileLogging {
        level: Some("  ".to_string()),
        file_prefix: Some(String::new()),
        file_rotation: Some(" Hourly ".to_string()),
        file_dir: Some("/var/log/vidlancing".to_string()),
        ..Default::default()
    }));
    assert_eq!(logging.level, "info");
    assert_eq!(logging.file_prefix, "vidlancing");
    assert_eq!(logging.file_rotation, LogRotation::Hourly);
    assert_eq!(logging.file_dir, PathBuf::from("/var/log/vidlancing"));

    let absent = LoggingConfig::from_file(None);
    assert_eq!(absent.file_rotation, LogRotation::Daily);
    assert!(!absent.file_enabled);
}
