//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// TOML string literal with escaping (paths may contain backslashes)
fn quote(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

impl Config {
    /// Render the full config file, including comments for every option
    pub fn to_toml(&self) -> String {
        let timeout = match self.request_timeout_secs {
            Some(secs) => format!("request_timeout_secs = {}", secs),
            None => "# request_timeout_secs = 30".to_string(),
        };

        format!(
            r#"# vidlancing-profile configuration

# Platform API root; profiles are fetched from <api_url>/users/<id>
api_url = {api_url}

# Per-request timeout in seconds (unset = wait indefinitely)
{timeout}

# strftime pattern for the "Member since" date
date_format = {date_format}

# Theme: dark, light (press 't' in the TUI to toggle)
theme = {theme}

# Where the bearer token comes from
[credentials]
source = {source}  # file, env
key = {key}  # key looked up in the file store
file = {file}  # relative paths resolve against the config directory
env_var = {env_var}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# File logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = {log_file_rotation}  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            api_url = quote(&self.api_url),
            timeout = timeout,
            date_format = quote(&self.date_format),
            theme = quote(&self.theme),
            source = quote(self.credentials.source.as_str()),
            key = quote(&self.credentials.key),
            file = quote(&self.credentials.file.display().to_string()),
            env_var = quote(&self.credentials.env_var),
            log_level = quote(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = quote(&self.logging.file_dir.display().to_string()),
            log_file_rotation = quote(self.logging.file_rotation.as_str()),
            log_file_prefix = quote(&self.logging.file_prefix),
        )
    }
}
