//! Error types for the registry client.
//!
//! # Design
//! Transport and decode failures are separate variants so callers can tell a
//! connectivity problem (worth retrying) from a malformed payload (not worth
//! retrying). A well-formed envelope carrying an `errorMessage` is promoted
//! to `Domain` instead of being returned as an empty action list.

use thiserror::Error;

use crate::http::TransportError;

/// Errors returned by `RegistryClient`.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The configured base address is not a usable absolute URL.
    #[error("invalid base url {url:?}: {reason}")]
    Config { url: String, reason: String },

    /// The request never produced a response.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: TransportError,
    },

    /// The registry answered, but with a body over the configured limit.
    /// Retrying will not help; raise `ClientConfig::max_body_bytes`.
    #[error("response from {url} exceeds {limit} bytes")]
    BodyTooLarge { url: String, limit: u64 },

    /// The response body is not a valid registry envelope.
    #[error("failed to decode registry response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The registry answered with an explicit error message.
    #[error("registry reported {status:?}: {message}")]
    Domain { status: String, message: String },
}

impl RegistryError {
    pub fn config<E: std::fmt::Display>(url: &str, reason: E) -> Self {
        Self::Config {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
