//! Client error types
use thiserror::Error;

use super::ports::TransportError;

/// Errors returned by every `CerteusClient` operation
#[derive(Error, Debug)]
pub enum ClientError {
    /// Server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Http {
        /// Numeric status code
        status: u16,
        /// Raw response body, verbatim
        body: String,
    },

    /// Failure raised by the transport itself (connection refused, DNS, ...)
    #[error(transparent)]
    Transport(TransportError),

    /// Successful response whose body is not the expected JSON shape
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// Request body could not be serialized
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ClientError {
    /// HTTP status for `Http` errors, `None` otherwise
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body for `Http` errors, `None` otherwise
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Http { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// A device name outside the fixed device-kind set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown device kind: {0}. Must be one of: hde, qoracle, entangler, chronosync")]
pub struct UnknownDeviceKind(pub String);
