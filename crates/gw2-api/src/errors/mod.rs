//! Error types and failure classification for the GW2 API crate.
//!
//! This module provides:
//! - [`ApiError`]: The error enum for all remote fetch operations
//! - [`FailureClass`]: Classification used by the load cycle

mod class;

pub use class::FailureClass;

use thiserror::Error;

/// Errors that can occur while fetching an account resource.
///
/// Each variant is classified into a [`FailureClass`] via
/// [`failure_class`](Self::failure_class).
#[derive(Error, Debug)]
pub enum ApiError {
    /// The API rejected the access token (HTTP 400/401).
    #[error("Invalid access token for {resource}: {message}")]
    InvalidCredential {
        /// Resource path that was requested
        resource: String,
        /// HTTP status code returned
        status: u16,
        /// Error text reported by the API
        message: String,
    },

    /// The access token does not carry a scope this resource requires (HTTP 403).
    #[error("Insufficient scope for {resource}: {message}")]
    InsufficientScope {
        /// Resource path that was requested
        resource: String,
        /// Error text reported by the API
        message: String,
    },

    /// Any other non-success HTTP status.
    #[error("HTTP {status} from {resource}: {message}")]
    Status {
        /// Resource path that was requested
        resource: String,
        /// HTTP status code returned
        status: u16,
        /// Error text reported by the API, or a truncated body
        message: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode {resource} response: {message}")]
    Decode {
        /// Resource path that was requested
        resource: String,
        /// Decoder error
        message: String,
    },

    /// The request never produced a response (DNS, TLS, timeout, ...).
    ///
    /// The URL is stripped from the inner error so the access token cannot
    /// leak into logs or user-facing messages.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The client could not be configured or the request could not be built.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.without_url())
    }
}

impl ApiError {
    /// Maps an HTTP status code and API error text to an [`ApiError`].
    pub fn from_status(resource: &str, status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 | 401 => ApiError::InvalidCredential {
                resource: resource.to_string(),
                status,
                message,
            },
            403 => ApiError::InsufficientScope {
                resource: resource.to_string(),
                message,
            },
            _ => ApiError::Status {
                resource: resource.to_string(),
                status,
                message,
            },
        }
    }

    /// Returns the failure classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use raidexplorer_gw2_api::errors::{ApiError, FailureClass};
    ///
    /// let error = ApiError::from_status("tokeninfo", 401, "Invalid access token");
    /// assert_eq!(error.failure_class(), FailureClass::InvalidCredential);
    ///
    /// let error = ApiError::from_status("account/bank", 403, "requires scope inventories");
    /// assert_eq!(error.failure_class(), FailureClass::InsufficientScope);
    /// ```
    pub fn failure_class(&self) -> FailureClass {
        match self {
            Self::InvalidCredential { .. } => FailureClass::InvalidCredential,
            Self::InsufficientScope { .. } => FailureClass::InsufficientScope,
            Self::Status { .. }
            | Self::Decode { .. }
            | Self::Network(_)
            | Self::InvalidRequest(_) => FailureClass::Other,
        }
    }
}
