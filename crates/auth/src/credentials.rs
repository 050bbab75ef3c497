//! Sign-in credentials (wire shape of the login request body).

use serde::{Deserialize, Serialize};

/// Transient credential pair. Never persisted; exists only for the duration
/// of form interaction and the in-flight request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_login_body_shape() {
        let creds = Credentials::new("alice@example.com", "hunter2");
        let json = serde_json::to_value(&creds).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"email": "alice@example.com", "password": "hunter2"})
        );
    }
}
