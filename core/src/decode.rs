//! Response body decoding.

use crate::error::RegistryError;
use crate::types::{Action, Envelope};

/// Decode a registry response body into its action list.
///
/// Missing envelope fields default to empty. Malformed JSON, a type mismatch
/// or a timestamp that is not RFC 3339 fails with `RegistryError::Decode`.
/// A non-empty `errorMessage` fails with `RegistryError::Domain`, so an
/// error reply never looks like a day without actions.
pub fn decode_actions(body: &[u8]) -> Result<Vec<Action>, RegistryError> {
    let envelope: Envelope = serde_json::from_slice(body)?;

    if !envelope.error_message.is_empty() {
        tracing::warn!(
            status = %envelope.status,
            message = %envelope.error_message,
            "registry returned an error message"
        );
        return Err(RegistryError::Domain {
            status: envelope.status,
            message: envelope.error_message,
        });
    }

    tracing::debug!(
        status = %envelope.status,
        actions = envelope.result.len(),
        "decoded registry response"
    );
    Ok(envelope.result)
}
