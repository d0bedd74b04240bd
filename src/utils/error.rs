//! Error types returned when fetching messages.
//!
//! The `Display` form of [`FetchError`] is the human-readable failure string
//! handed back to callers: `"<status> - <statusText> <detail>"` for HTTP
//! failures, the underlying message text for everything else.

use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

/// Failure reported by an `HttpTransport` before any response was received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-2xx response.
    #[error("{status} - {status_text} {detail}")]
    Http {
        status: u16,
        status_text: String,
        detail: String,
    },

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Body could not be decoded into the expected shape.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to read fixture {}: {source}", .path.display())]
    Fixture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// Builds an HTTP failure from a status line and the raw response body.
    ///
    /// The detail is the body's `error` field when present and truthy,
    /// otherwise the body re-serialized as JSON. `null`, `false`, `0` and
    /// `""` count as absent. Bodies that are not JSON are
    /// used as-is.
    pub fn http(status: u16, status_text: impl Into<String>, body: &str) -> Self {
        Self::Http {
            status,
            status_text: status_text.into(),
            detail: error_detail(body),
        }
    }
}

fn error_detail(body: &str) -> String {
    if body.trim().is_empty() {
        return String::new();
    }

    match serde_json::from_str::<Value>(body) {
        Ok(value) => match value.get("error").filter(|err| is_truthy(err)) {
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
            None => value.to_string(),
        },
        Err(_) => body.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
