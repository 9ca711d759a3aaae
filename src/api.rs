//! Profile API client
//!
//! The view talks to the platform through the [`ProfileApi`] trait so the
//! controller can be driven by an in-memory fake in tests and by
//! [`HttpProfileApi`] (reqwest) in the real client.
//!
//! # Error classification
//!
//! ```text
//! LoadError
//! ├── Network / Status / Parse  → ErrorKind::LoadFailure
//! └── Empty                     → ErrorKind::EmptyResult
//! ```

use crate::profile::UserProfile;
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

/// Coarse classification of a failed load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure, non-2xx status or unreadable body
    LoadFailure,
    /// Successful response that carried no record
    EmptyResult,
}

/// Errors that can occur while fetching a profile
///
/// These are diagnostic only. The view never shows them to the user.
#[derive(Debug)]
pub enum LoadError {
    /// Connection, DNS, TLS or timeout failure
    Network(String),
    /// Server answered with a non-success status
    Status { status: u16, body: String },
    /// Body was not a JSON profile
    Parse(String),
    /// Body was `null` or `{}`
    Empty,
}

impl LoadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Empty => ErrorKind::EmptyResult,
            Self::Network(_) | Self::Status { .. } | Self::Parse(_) => ErrorKind::LoadFailure,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Status { status, body } => {
                if body.is_empty() {
                    write!(f, "HTTP {}", status)
                } else {
                    write!(f, "HTTP {}: {}", status, body)
                }
            }
            Self::Parse(msg) => write!(f, "Invalid profile body: {}", msg),
            Self::Empty => write!(f, "Response contained no profile"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Source of user profiles
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Human-readable name for logging
    fn name(&self) -> &'static str;

    /// Fetch one profile by route identifier
    ///
    /// `token` is sent as a bearer credential when present; an absent token
    /// still issues the request and lets the server reject it.
    async fn fetch_profile(
        &self,
        id: &str,
        token: Option<&str>,
    ) -> Result<UserProfile, LoadError>;
}

/// Decode a 2xx response body into a profile
///
/// `null` and `{}` are an empty result rather than a record of defaults.
pub fn decode_profile(body: &[u8]) -> Result<UserProfile, LoadError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| LoadError::Parse(e.to_string()))?;

    match &value {
        serde_json::Value::Null => return Err(LoadError::Empty),
        serde_json::Value::Object(map) if map.is_empty() => return Err(LoadError::Empty),
        serde_json::Value::Object(_) => {}
        other => {
            return Err(LoadError::Parse(format!(
                "expected a JSON object, got {}",
                json_type_name(other)
            )))
        }
    }

    serde_json::from_value(value).map_err(|e| LoadError::Parse(e.to_string()))
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Maximum number of error-body bytes kept for diagnostics
const MAX_ERROR_BODY: usize = 512;

/// reqwest-backed client for `GET {base}/users/{id}`
pub struct HttpProfileApi {
    client: reqwest::Client,
    base_url: reqwest::Url,
}

impl HttpProfileApi {
    /// Create a client for the given API root
    ///
    /// # Errors
    /// Returns an error if the base URL cannot serve as a path prefix or the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut base_url = reqwest::Url::parse(base_url)
            .map_err(|e| anyhow::anyhow!("Invalid API URL '{}': {}", base_url, e))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("API URL '{}' cannot be used as a base", base_url);
        }
        // Treat the configured path as a directory so "users" is appended to it
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        tracing::debug!(
            "Initialized profile API client: {} (timeout: {:?})",
            base_url,
            timeout
        );

        Ok(Self { client, base_url })
    }

    /// URL for one profile, with the identifier as a single encoded segment
    pub fn profile_url(&self, id: &str) -> reqwest::Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("users").push(id);
        }
        url
    }
}

#[async_trait]
impl ProfileApi for HttpProfileApi {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch_profile(
        &self,
        id: &str,
        token: Option<&str>,
    ) -> Result<UserProfile, LoadError> {
        let url = self.profile_url(id);
        tracing::debug!("GET {}", url);

        let mut req = self.client.get(url).header("Accept", "application/json");
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }

        let response = req
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        if !status.is_success() {
            let mut text = String::from_utf8_lossy(&body).into_owned();
            if text.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !text.is_char_boundary(cut) {
                    cut -= 1;
                }
                text.truncate(cut);
            }
            return Err(LoadError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        decode_profile(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Path;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;
    use axum::Router;

    /// Serve a tiny users API on an ephemeral port and return its base URL
    async fn spawn_server() -> String {
        async fn user(Path(id): Path<String>, headers: HeaderMap) -> (StatusCode, String) {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("");
            if auth != "Bearer secret" {
                return (StatusCode::UNAUTHORIZED, "missing token".to_string());
            }
            match id.as_str() {
                "empty" => (StatusCode::OK, "null".to_string()),
                "broken" => (StatusCode::OK, "<html>".to_string()),
                "a b" => (
                    StatusCode::OK,
                    r#"{"id":"a b","firstname":"Space","lastname":"Case"}"#.to_string(),
                ),
                other => (
                    StatusCode::OK,
                    format!(
                        r#"{{"id":"{}","firstname":"Grace","lastname":"Hopper","role":"CLIENT"}}"#,
                        other
                    ),
                ),
            }
        }

        let app = Router::new().route("/api/users/:id", get(user));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/api", addr)
    }

    #[test]
    fn test_decode_profile_empty_shapes() {
        assert!(matches!(decode_profile(b"null"), Err(LoadError::Empty)));
        assert!(matches!(decode_profile(b"{}"), Err(LoadError::Empty)));
        assert!(matches!(decode_profile(b"[1]"), Err(LoadError::Parse(_))));
        assert!(matches!(decode_profile(b"not json"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_decode_profile_with_null_fields() {
        let profile = decode_profile(
            br#"{"id":"1","firstname":"Ada","lastname":null,"role":null,"isVerified":null}"#,
        )
        .unwrap();
        assert_eq!(profile.full_name(), "Ada ");
        assert!(!profile.is_verified);
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(LoadError::Empty.kind(), ErrorKind::EmptyResult);
        assert_eq!(
            LoadError::Status {
                status: 500,
                body: String::new()
            }
            .kind(),
            ErrorKind::LoadFailure
        );
        assert_eq!(
            LoadError::Network("refused".into()).kind(),
            ErrorKind::LoadFailure
        );
    }

    #[test]
    fn test_profile_url_encodes_identifier() {
        let api = HttpProfileApi::new("https://api.example.com/v1", None).unwrap();
        assert_eq!(
            api.profile_url("abc").as_str(),
            "https://api.example.com/v1/users/abc"
        );
        assert_eq!(
            api.profile_url("a/b c").as_str(),
            "https://api.example.com/v1/users/a%2Fb%20c"
        );
    }

    #[test]
    fn test_rejects_non_base_url() {
        assert!(HttpProfileApi::new("mailto:someone@example.com", None).is_err());
        assert!(HttpProfileApi::new("not a url", None).is_err());
    }

    #[tokio::test]
    async fn test_fetch_profile_success() {
        let base = spawn_server().await;
        let api = HttpProfileApi::new(&base, None).unwrap();

        let profile = api.fetch_profile("42", Some("secret")).await.unwrap();
        assert_eq!(profile.id, "42");
        assert_eq!(profile.full_name(), "Grace Hopper");

        let spaced = api.fetch_profile("a b", Some("secret")).await.unwrap();
        assert_eq!(spaced.id, "a b");
    }

    #[tokio::test]
    async fn test_fetch_profile_failures() {
        let base = spawn_server().await;
        let api = HttpProfileApi::new(&base, None).unwrap();

        let err = api.fetch_profile("42", None).await.unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 401, .. }));

        let err = api.fetch_profile("empty", Some("secret")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyResult);

        let err = api.fetch_profile("broken", Some("secret")).await.unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_profile_network_error() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = HttpProfileApi::new(&format!("http://{}", addr), None).unwrap();
        let err = api.fetch_profile("1", Some("secret")).await.unwrap_err();
        assert!(matches!(err, LoadError::Network(_)));
    }
}
