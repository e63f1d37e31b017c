//! Error types for the Huobi client library.

use reqwest::StatusCode;
use thiserror::Error;

use crate::rest::ResponseEnvelope;

/// The main error type for all Huobi client operations.
#[derive(Error, Debug)]
pub enum HuobiError {
    /// The client could not be constructed from the supplied configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The shared request entry point was given a method other than GET or POST
    #[error("Invalid method: {0} (only GET or POST are supported)")]
    InvalidMethod(String),

    /// The request path does not start with `/` after normalization
    #[error("Invalid path: {0:?} (path must start with /)")]
    InvalidPath(String),

    /// The request could not be signed
    #[error("Signing error: {0}")]
    Signing(String),

    /// The server answered with a status code other than 200
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Status code returned by the server
        status: StatusCode,
        /// Raw response body
        body: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(reqwest_middleware::Error),

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The body of a 200 response was not a valid envelope
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Huobi API returned a non-`ok` status
    #[error("Huobi API error: {0}")]
    Api(ApiError),
}

impl HuobiError {
    /// Whether this error happened at the transport level.
    ///
    /// Covers network failures, timeouts, non-200 status codes and bodies that
    /// are not a response envelope.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::HttpStatus { .. }
                | Self::Http(_)
                | Self::HttpMiddleware(_)
                | Self::Timeout
                | Self::InvalidResponse(_)
        )
    }

    /// The API error carried by this error, if any.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest_middleware::Error> for HuobiError {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(e) if e.is_timeout() => Self::Timeout,
            reqwest_middleware::Error::Reqwest(e) => Self::Http(e),
            other => Self::HttpMiddleware(other),
        }
    }
}

/// An application-level error returned by the Huobi API.
///
/// Huobi answers HTTP 200 for rejected requests and reports the failure in the
/// body, e.g. `{"status": "error", "err-code": "api-signature-not-valid", "err-msg": "..."}`.
/// The full envelope is kept so callers can inspect any extra fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    envelope: ResponseEnvelope,
}

impl ApiError {
    /// Wrap a rejected response envelope.
    pub fn new(envelope: ResponseEnvelope) -> Self {
        Self { envelope }
    }

    /// The full response envelope.
    pub fn envelope(&self) -> &ResponseEnvelope {
        &self.envelope
    }

    /// Consume the error and return the envelope.
    pub fn into_envelope(self) -> ResponseEnvelope {
        self.envelope
    }

    /// The `status` field as returned by the server.
    pub fn status(&self) -> Option<&str> {
        self.envelope.status()
    }

    /// The `err-code` field, if present.
    pub fn code(&self) -> Option<&str> {
        self.envelope.get("err-code").and_then(|v| v.as_str())
    }

    /// The `err-msg` field, if present.
    pub fn message(&self) -> Option<&str> {
        self.envelope.get("err-msg").and_then(|v| v.as_str())
    }

    /// Check if the server rejected the request signature.
    ///
    /// This is also what Huobi reports when the `Timestamp` drifted too far.
    pub fn is_signature_invalid(&self) -> bool {
        self.code() == Some(error_codes::SIGNATURE_NOT_VALID)
    }

    /// Check if the server rejected one of the request parameters.
    pub fn is_invalid_parameter(&self) -> bool {
        self.code() == Some(error_codes::INVALID_PARAMETER)
    }

    /// Check if the endpoint requires a signed request.
    pub fn is_login_required(&self) -> bool {
        self.code() == Some(error_codes::LOGIN_REQUIRED)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.code().unwrap_or("unknown"),
            self.message().unwrap_or("no message")
        )
    }
}

/// Known Huobi `err-code` values for pattern matching.
pub mod error_codes {
    /// Signature verification failed
    pub const SIGNATURE_NOT_VALID: &str = "api-signature-not-valid";
    /// Signature parameters are missing or malformed
    pub const SIGNATURE_CHECK_FAILED: &str = "api-signature-check-failed";
    /// A request parameter is invalid
    pub const INVALID_PARAMETER: &str = "invalid-parameter";
    /// Unknown or delisted symbol
    pub const BASE_SYMBOL_ERROR: &str = "base-symbol-error";
    /// Account balance is insufficient for the order
    pub const INSUFFICIENT_BALANCE: &str = "account-frozen-balance-insufficient-error";
    /// Login is required for the endpoint
    pub const LOGIN_REQUIRED: &str = "login-required";
}
