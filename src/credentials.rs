// Credential stores - where the bearer token comes from
//
// The token is looked up by exact key every time a request is made, never
// cached between loads. A missing token is not an error here; the request is
// sent without it and the server decides.

use std::collections::HashMap;
use std::path::PathBuf;

/// Read access to the bearer credential
pub trait CredentialProvider: Send + Sync {
    /// Human-readable name for logging
    fn name(&self) -> &'static str;

    /// Current token, if any
    fn token(&self) -> Option<String>;
}

/// Key-value file store (TOML `key = "value"` lines)
///
/// The file is re-read on every lookup so a token written by another process
/// (a login helper, for example) is picked up on the next load.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
    key: String,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    fn read_entries(&self) -> Option<HashMap<String, toml::Value>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(
                    "Cannot read credential store {}: {}",
                    self.path.display(),
                    e
                );
                return None;
            }
        };

        match toml::from_str(&contents) {
            Ok(entries) => Some(entries),
            Err(e) => {
                tracing::warn!(
                    "Credential store {} is not valid TOML: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }
}

impl CredentialProvider for FileCredentialStore {
    fn name(&self) -> &'static str {
        "file"
    }

    fn token(&self) -> Option<String> {
        let entries = self.read_entries()?;
        match entries.get(&self.key) {
            Some(toml::Value::String(token)) => Some(token.clone()),
            Some(_) => {
                tracing::warn!(
                    "Credential '{}' in {} is not a string",
                    self.key,
                    self.path.display()
                );
                None
            }
            None => None,
        }
    }
}

/// Environment variable store
#[derive(Debug, Clone)]
pub struct EnvCredentialStore {
    var: String,
}

impl EnvCredentialStore {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialProvider for EnvCredentialStore {
    fn name(&self) -> &'static str {
        "env"
    }

    fn token(&self) -> Option<String> {
        std::env::var(&self.var).ok()
    }
}

/// Fixed token, for headless scripting and tests
#[derive(Debug, Clone, Default)]
pub struct StaticCredential(pub Option<String>);

impl CredentialProvider for StaticCredential {
    fn name(&self) -> &'static str {
        "static"
    }

    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_store_reads_exact_key() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "token = \"abc123\"\ntoken_old = \"stale\"").unwrap();

        let store = FileCredentialStore::new(file.path(), "token");
        assert_eq!(store.token().as_deref(), Some("abc123"));

        let other = FileCredentialStore::new(file.path(), "tok");
        assert_eq!(other.token(), None);
    }

    #[test]
    fn test_file_store_rereads_on_every_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.toml");
        let store = FileCredentialStore::new(&path, "token");

        assert_eq!(store.token(), None);

        std::fs::write(&path, "token = \"first\"").unwrap();
        assert_eq!(store.token().as_deref(), Some("first"));

        std::fs::write(&path, "token = \"second\"").unwrap();
        assert_eq!(store.token().as_deref(), Some("second"));
    }

    #[test]
    fn test_file_store_ignores_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "token = [1, 2").unwrap();
        let store = FileCredentialStore::new(file.path(), "token");
        assert_eq!(store.token(), None);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "token = 42").unwrap();
        let store = FileCredentialStore::new(file.path(), "token");
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_env_store() {
        let var = "VIDLANCING_TEST_TOKEN_ENV_STORE";
        let store = EnvCredentialStore::new(var);
        std::env::remove_var(var);
        assert_eq!(store.token(), None);
        std::env::set_var(var, "from-env");
        assert_eq!(store.token().as_deref(), Some("from-env"));
        std::env::remove_var(var);
    }
}
