//! Configuration for the profile client
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/vidlancing/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod credentials;
mod observability;
mod serialization;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use credentials::{CredentialSource, CredentialsConfig, FileCredentials};
pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_API_URL: &str = "http://localhost:8080/api";
const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";
const DEFAULT_THEME: &str = "dark";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Platform API root; profiles live at `{api_url}/users/{id}`
    pub api_url: String,

    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout_secs: Option<u64>,

    /// strftime pattern for "Member since"
    pub date_format: String,

    /// Theme name: "dark" or "light"
    pub theme: String,

    /// Whether to enable the TUI (disabled for headless mode)
    pub enable_tui: bool,

    /// Where the bearer token is read from
    pub credentials: CredentialsConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: None,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            theme: DEFAULT_THEME.to_string(),
            enable_tui: true,
            credentials: CredentialsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub date_format: Option<String>,
    pub theme: Option<String>,

    /// Optional [credentials] section
    pub credentials: Option<FileCredentials>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Directory holding config.toml and the default credential store
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("vidlancing"))
    }

    /// Get the config file path: ~/.config/vidlancing/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A missing file means defaults. A file that exists but cannot be read
    /// or parsed is an error.
    fn load_file_config() -> Result<FileConfig> {
        let Some(path) = Self::config_path() else {
            return Ok(FileConfig::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse_file_config(&contents)
                .with_context(|| format!("Failed to parse {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e).with_context(|| format!("Cannot read {}", path.display())),
        }
    }

    pub(crate) fn parse_file_config(contents: &str) -> Result<FileConfig> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Result<Self> {
        let file = Self::load_file_config()?;
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Merge file values with an environment lookup
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        // API URL: env > file > default
        let api_url = env("VIDLANCING_API_URL")
            .or(file.api_url)
            .unwrap_or(defaults.api_url);

        // Timeout: env > file > none
        let request_timeout_secs = match env("VIDLANCING_TIMEOUT_SECS") {
            Some(raw) => Some(
                raw.parse()
                    .with_context(|| format!("VIDLANCING_TIMEOUT_SECS is not a number: {}", raw))?,
            ),
            None => file.request_timeout_secs,
        }
        .filter(|secs| *secs > 0);

        let date_format = file.date_format.unwrap_or(defaults.date_format);

        // Theme: env > file > default
        let theme = env("VIDLANCING_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // TUI toggle: env only (runtime flag)
        let enable_tui = env("VIDLANCING_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        let credentials = CredentialsConfig::from_file(file.credentials, Self::config_dir());
        let logging = LoggingConfig::from_file(file.logging);

        Ok(Self {
            api_url,
            request_timeout_secs,
            date_format,
            theme,
            enable_tui,
            credentials,
            logging,
        })
    }
}
