use crate::error_code::ErrorCode;
use crate::transport::TransportError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Prefix used to build the identity label of a remote error.
pub const ERROR_NAME_PREFIX: &str = "NewsAPIError";

/// Unified error type for the News API client.
///
/// Transport and parse failures carry the native error untouched; only an
/// error envelope returned by the remote service is normalized.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Response parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Api(#[from] NewsApiError),

    #[error("Runtime error: {message}")]
    Runtime { message: String },
}

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// The normalized remote error, if this is one.
    pub fn as_api(&self) -> Option<&NewsApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }
}

/// An application-level failure signaled by `"status": "error"`.
///
/// The HTTP round-trip itself succeeded; the service rejected the request.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{}: {}: {}", ERROR_NAME_PREFIX, .code, .message)]
pub struct NewsApiError {
    /// Remote `code` field, e.g. `apiKeyInvalid`.
    pub code: String,
    /// Remote `message` field, verbatim.
    pub message: String,
    /// HTTP status of the response that carried the envelope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
}

impl NewsApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            http_status: None,
        }
    }

    pub fn with_http_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    /// Build from a parsed error envelope. Missing fields become empty strings.
    pub fn from_envelope(envelope: &Value) -> Self {
        Self::new(
            field_as_string(envelope, "code"),
            field_as_string(envelope, "message"),
        )
    }

    /// Identity label derived from the remote code, e.g. `NewsAPIError: apiKeyInvalid`.
    pub fn name(&self) -> String {
        format!("{}: {}", ERROR_NAME_PREFIX, self.code)
    }

    pub fn kind(&self) -> ErrorCode {
        ErrorCode::from_remote_code(&self.code)
    }
}

fn field_as_string(envelope: &Value, key: &str) -> String {
    match envelope.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
