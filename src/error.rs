//! Error types for API calls.

use std::sync::Arc;

use http::StatusCode;
use thiserror::Error;

use crate::transport::HttpError;

/// Error type for every API call made through [`SwervpayClient`](crate::SwervpayClient).
///
/// Each call either returns a fully decoded value or exactly one of these.
/// Server-message variants render as `[ERROR]: <message>`.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be constructed. Never retried.
    #[error("Failed to build request: {0}")]
    Build(#[from] BuildError),

    /// The request never produced a response.
    ///
    /// The client does not retry these; callers may.
    #[error("Network failure: {0}")]
    Network(#[from] HttpError),

    /// Obtaining a fresh bearer token failed, so the original call failed too.
    ///
    /// Callers queued behind the same failed exchange share its cause.
    #[error("Authentication failed: {source}")]
    Auth {
        /// What went wrong during the auth exchange
        #[source]
        source: Arc<Error>,
    },

    /// The server rejected the input (400 or 422).
    #[error("[ERROR]: {message}")]
    InvalidRequest {
        /// HTTP status of the response
        status: StatusCode,
        /// Server-side error name (may be empty)
        name: String,
        /// Server-supplied message
        message: String,
    },

    /// The resource does not exist (404). The response body is ignored.
    #[error("[ERROR]: Not Found")]
    NotFound,

    /// Any other error status carrying a `message`.
    #[error("[ERROR]: {message}")]
    Api {
        /// HTTP status of the response
        status: StatusCode,
        /// Server-supplied message
        message: String,
    },

    /// Any other error status without a usable `message`.
    #[error("[ERROR]: Unknown Error")]
    Unknown {
        /// HTTP status of the response
        status: StatusCode,
    },

    /// A response body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request was still rejected with 401 after a fresh token was obtained.
    #[error("Request unauthorized after re-authentication")]
    Unauthorized,

    /// The caller's cancellation token fired before the call completed.
    #[error("Request cancelled")]
    Cancelled,

    /// The caller's deadline passed before the call completed.
    #[error("Request deadline exceeded")]
    DeadlineExceeded,
}

/// Why a request could not be built.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The path could not be resolved against the base URL.
    #[error("Invalid path '{path}': {source}")]
    InvalidPath {
        /// The relative path that failed
        path: String,
        /// Underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// The request body could not be serialized to JSON.
    #[error("Failed to serialize body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A path id that cannot stand as its own segment (empty, `.` or `..`).
    #[error("Invalid path id '{id}'")]
    InvalidId {
        /// The rejected id
        id: String,
    },

    /// A header value contained bytes HTTP does not allow.
    #[error("Invalid header value for '{name}'")]
    InvalidHeader {
        /// The header name
        name: &'static str,
    },
}

impl Error {
    /// Wraps a failure of the auth exchange.
    ///
    /// Caller cancellation and deadline expiry pass through unwrapped.
    #[must_use]
    pub fn auth(source: Self) -> Self {
        match source {
            Self::Cancelled | Self::DeadlineExceeded | Self::Auth { .. } => source,
            other => Self::Auth {
                source: Arc::new(other),
            },
        }
    }

    /// Returns the server-supplied message, if this error carries one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::InvalidRequest { message, .. } | Self::Api { message, .. } => Some(message),
            Self::Auth { source } => source.message(),
            _ => None,
        }
    }

    /// Returns the HTTP status that produced this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::InvalidRequest { status, .. }
            | Self::Api { status, .. }
            | Self::Unknown { status } => Some(*status),
            Self::NotFound => Some(StatusCode::NOT_FOUND),
            Self::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            Self::Auth { source } => source.status(),
            _ => None,
        }
    }

    /// Returns true for a 404 response.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Returns true if the call failed while obtaining a token.
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    /// Creates a decode error from a plain message.
    pub(crate) fn decode_msg(msg: &str) -> Self {
        Self::Decode(<serde_json::Error as serde::de::Error>::custom(msg))
    }
}
