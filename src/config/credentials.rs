//! Credential store configuration
//!
//! Chooses where the bearer token is read from. The token itself is never
//! stored in config.toml.

use crate::credentials::{CredentialProvider, EnvCredentialStore, FileCredentialStore};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Backing store for the bearer token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CredentialSource {
    /// Key-value file (default)
    #[default]
    File,
    /// Environment variable
    Env,
}

impl CredentialSource {
    /// Parse source string from config
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "env" => Self::Env,
            _ => Self::File, // Default to file for unknown values
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Env => "env",
        }
    }
}

/// Credential configuration
#[derive(Debug, Clone)]
pub struct CredentialsConfig {
    pub source: CredentialSource,
    /// Key looked up in the file store
    pub key: String,
    /// Path of the file store
    pub file: PathBuf,
    /// Variable read by the env store
    pub env_var: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            source: CredentialSource::File,
            key: "token".to_string(),
            file: PathBuf::from("credentials.toml"),
            env_var: "VIDLANCING_TOKEN".to_string(),
        }
    }
}

/// Credential settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FileCredentials {
    pub source: Option<String>,
    pub key: Option<String>,
    pub file: Option<String>,
    pub env_var: Option<String>,
}

impl CredentialsConfig {
    /// Create from file config with defaults
    ///
    /// A relative store path is resolved against `config_dir`.
    pub fn from_file(file: Option<FileCredentials>, config_dir: Option<PathBuf>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let store = file.file.map(PathBuf::from).unwrap_or(defaults.file);
        let store = match config_dir {
            Some(dir) if store.is_relative() => dir.join(store),
            _ => store,
        };

        Self {
            source: file
                .source
                .map(|s| CredentialSource::from_str(&s))
                .unwrap_or(defaults.source),
            key: file.key.unwrap_or(defaults.key),
            file: store,
            env_var: file.env_var.unwrap_or(defaults.env_var),
        }
    }

    /// Build the configured credential provider
    pub fn provider(&self) -> Arc<dyn CredentialProvider> {
        match self.source {
            CredentialSource::File => {
                Arc::new(FileCredentialStore::new(&self.file, &self.key))
            }
            CredentialSource::Env => Arc::new(EnvCredentialStore::new(&self.env_var)),
        }
    }
}
