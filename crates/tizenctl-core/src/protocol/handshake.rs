//! Pairing handshake reply parsing.
//!
//! When the control channel is opened *without* a pairing token, the TV sends
//! one JSON frame before accepting any commands:
//!
//! ```json
//! {
//!   "event": "ms.channel.connect",
//!   "data": {
//!     "id": "...",
//!     "token": "12345678"
//!   }
//! }
//! ```
//!
//! The only field this client needs is `data.token` — the opaque pairing
//! credential that must be echoed in the connection URL of every later
//! session so the TV does not re-prompt the user for authorization.
//!
//! Anything other than an object with a string `data.token` is a failed
//! handshake.  A malformed reply is never retried: the TV either issued a
//! token or it did not, and reconnecting with the same token-less URL would
//! produce the same reply.

use thiserror::Error;

/// Error type for handshake reply parsing.
#[derive(Debug, Error)]
pub enum HandshakeError {
    /// The reply was not valid JSON at all.
    #[error("handshake reply is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The reply parsed, but the expected field is absent.
    #[error("handshake reply missing field `{0}`")]
    MissingField(&'static str),

    /// The field exists but is not the expected JSON type.
    #[error("handshake field `{field}` is not a {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}

/// Extracts the pairing token from a raw handshake reply frame.
///
/// Each field is checked explicitly so the error names exactly what was
/// wrong with the reply rather than surfacing a generic parse failure.
///
/// # Errors
///
/// - [`HandshakeError::Malformed`] if `raw` is not valid JSON.
/// - [`HandshakeError::MissingField`] if `data` or `data.token` is absent.
/// - [`HandshakeError::WrongType`] if `data` is not an object or
///   `data.token` is not a string.
pub fn parse_handshake_token(raw: &str) -> Result<String, HandshakeError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;

    let data = value
        .get("data")
        .ok_or(HandshakeError::MissingField("data"))?;
    if !data.is_object() {
        return Err(HandshakeError::WrongType {
            field: "data",
            expected: "object",
        });
    }

    let token = data
        .get("token")
        .ok_or(HandshakeError::MissingField("data.token"))?;
    token
        .as_str()
        .map(str::to_owned)
        .ok_or(HandshakeError::WrongType {
            field: "data.token",
            expected: "string",
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_extracted_from_valid_reply() {
        // Arrange: the reply shape the TV sends on first connection
        let raw = r#"{"event":"ms.channel.connect","data":{"id":"c-1","token":"abc"}}"#;

        // Act
        let token = parse_handshake_token(raw).unwrap();

        // Assert
        assert_eq!(token, "abc");
    }

    #[test]
    fn test_minimal_reply_with_only_data_token_parses() {
        let token = parse_handshake_token(r#"{"data":{"token":"12345678"}}"#).unwrap();
        assert_eq!(token, "12345678");
    }

    #[test]
    fn test_reply_missing_data_is_rejected() {
        let result = parse_handshake_token(r#"{"event":"ms.channel.connect"}"#);
        assert!(matches!(result, Err(HandshakeError::MissingField("data"))));
    }

    #[test]
    fn test_reply_missing_token_is_rejected() {
        let result = parse_handshake_token(r#"{"data":{"id":"c-1"}}"#);
        assert!(matches!(
            result,
            Err(HandshakeError::MissingField("data.token"))
        ));
    }

    #[test]
    fn test_non_string_token_is_rejected() {
        let result = parse_handshake_token(r#"{"data":{"token":42}}"#);
        assert!(matches!(
            result,
            Err(HandshakeError::WrongType {
                field: "data.token",
                ..
            })
        ));
    }

    #[test]
    fn test_non_object_data_is_rejected() {
        let result = parse_handshake_token(r#"{"data":"nope"}"#);
        assert!(matches!(
            result,
            Err(HandshakeError::WrongType { field: "data", .. })
        ));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let result = parse_handshake_token("{{{ not json");
        assert!(matches!(result, Err(HandshakeError::Malformed(_))));
    }
}
