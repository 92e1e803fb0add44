//! 远端错误码：将 News API 的 `code` 字段归类。
//!
//! News API error codes.
//!
//! The service reports failures as `{"status": "error", "code": ..., "message": ...}`.
//! This module maps the documented `code` strings onto a closed enum so callers
//! can branch on them without string matching.
//!
//! ## Categories
//!
//! | Category  | Codes                                                        |
//! |-----------|--------------------------------------------------------------|
//! | auth      | apiKeyDisabled, apiKeyInvalid, apiKeyMissing                 |
//! | request   | parameterInvalid, parametersMissing, sourcesTooMany, sourceDoesNotExist |
//! | rate      | apiKeyExhausted, rateLimited                                 |
//! | server    | unexpectedError                                              |
//! | unknown   | anything else                                                |
//!
//! ## Example
//!
//! ```rust
//! use newsapi_rs::error_code::ErrorCode;
//!
//! let code = ErrorCode::from_remote_code("rateLimited");
//! assert_eq!(code, ErrorCode::RateLimited);
//! assert_eq!(code.category(), "rate");
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The API key has been disabled.
    ApiKeyDisabled,
    /// The API key has no more requests available.
    ApiKeyExhausted,
    /// The API key was not entered correctly or does not exist.
    ApiKeyInvalid,
    /// The API key is missing from the request.
    ApiKeyMissing,
    /// A parameter is missing or has an unsupported value.
    ParameterInvalid,
    /// Required parameters are missing.
    ParametersMissing,
    /// Too many requests within a window of time.
    RateLimited,
    /// More than 20 sources were requested.
    SourcesTooMany,
    /// A requested source does not exist.
    SourceDoesNotExist,
    /// The service failed internally.
    UnexpectedError,
    /// Code not in the documented set.
    Unknown,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 10] = [
        Self::ApiKeyDisabled,
        Self::ApiKeyExhausted,
        Self::ApiKeyInvalid,
        Self::ApiKeyMissing,
        Self::ParameterInvalid,
        Self::ParametersMissing,
        Self::RateLimited,
        Self::SourcesTooMany,
        Self::SourceDoesNotExist,
        Self::UnexpectedError,
    ];

    /// Remote spelling of the code (e.g. `"apiKeyInvalid"`).
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ApiKeyDisabled => "apiKeyDisabled",
            Self::ApiKeyExhausted => "apiKeyExhausted",
            Self::ApiKeyInvalid => "apiKeyInvalid",
            Self::ApiKeyMissing => "apiKeyMissing",
            Self::ParameterInvalid => "parameterInvalid",
            Self::ParametersMissing => "parametersMissing",
            Self::RateLimited => "rateLimited",
            Self::SourcesTooMany => "sourcesTooMany",
            Self::SourceDoesNotExist => "sourceDoesNotExist",
            Self::UnexpectedError => "unexpectedError",
            Self::Unknown => "unknown",
        }
    }

    /// Returns `"auth"`, `"request"`, `"rate"`, `"server"` or `"unknown"`.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::ApiKeyDisabled | Self::ApiKeyInvalid | Self::ApiKeyMissing => "auth",
            Self::ParameterInvalid
            | Self::ParametersMissing
            | Self::SourcesTooMany
            | Self::SourceDoesNotExist => "request",
            Self::ApiKeyExhausted | Self::RateLimited => "rate",
            Self::UnexpectedError => "server",
            Self::Unknown => "unknown",
        }
    }

    #[inline]
    pub fn is_auth(&self) -> bool {
        self.category() == "auth"
    }

    /// Case-sensitive; the service always uses camelCase.
    pub fn from_remote_code(code: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == code)
            .unwrap_or(Self::Unknown)
    }

    /// Most likely code for an HTTP status when the body carried no envelope.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Self::ParameterInvalid,
            401 => Self::ApiKeyInvalid,
            429 => Self::RateLimited,
            500..=599 => Self::UnexpectedError,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
