//! Sign-in response classification.
//!
//! The login endpoint answers in three shapes: a bare token string on
//! success, `{"message": {field: [text, ..]}}` on validation failure (422),
//! and `{"message": text}` (or nothing usable) on any other failure. One
//! function turns status + body into a tagged result so callers never probe
//! payload shapes themselves.

use serde_json::Value;
use thiserror::Error;

use orgdesk_core::FieldErrors;

/// Fallback message when a failure response carries no usable `message`.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Login failed";

/// HTTP status the server uses for per-field validation failures.
const VALIDATION_STATUS: u16 = 422;

/// Fields the login endpoint reports validation messages for.
const SIGN_IN_FIELDS: [&str; 2] = ["email", "password"];

/// A failed sign-in attempt.
///
/// Every variant is recoverable: the user may resubmit the form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignInError {
    /// The server rejected individual fields; messages render inline.
    #[error("validation failed")]
    Validation(FieldErrors),

    /// The server reported a request-level failure.
    #[error("{message}")]
    General { message: String },

    /// The response was successful but carried no token.
    #[error("no token found in response")]
    MissingToken,

    /// The request never produced a usable response (network or decode
    /// failure). The detail is for logging, not for the user.
    #[error("network request failed: {0}")]
    Transport(String),
}

/// Classify a login response into a token or a tagged failure.
///
/// `body` is the parsed JSON response body; transport and parse failures are
/// the caller's concern ([`SignInError::Transport`]).
pub fn classify_response(status: u16, body: &Value) -> Result<String, SignInError> {
    if !(200..300).contains(&status) {
        if status == VALIDATION_STATUS {
            if let Some(messages) = body.get("message").and_then(Value::as_object) {
                let mut fields = FieldErrors::new();
                for field in SIGN_IN_FIELDS {
                    if let Some(text) = messages
                        .get(field)
                        .and_then(|entry| entry.get(0))
                        .and_then(Value::as_str)
                    {
                        fields.set(field, text);
                    }
                }
                return Err(SignInError::Validation(fields));
            }
        }

        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_FAILURE_MESSAGE)
            .to_string();
        return Err(SignInError::General { message });
    }

    // Success: the entire body is the session token. Only a non-empty string
    // is usable; anything else means the token is missing.
    match body {
        Value::String(token) if !token.is_empty() => Ok(token.clone()),
        _ => Err(SignInError::MissingToken),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
