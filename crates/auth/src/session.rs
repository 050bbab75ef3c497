//! Session token storage.
//!
//! The token is an opaque string; presence is the only invariant consumers
//! check. Guards and the sign-in flow depend on the [`SessionStore`] trait
//! rather than on a global, so tests can substitute an in-memory store and
//! the app crate can plug in browser `localStorage`.

use std::cell::RefCell;

use thiserror::Error;

/// Storage key under which the raw token string is persisted.
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The backing storage cannot be reached (e.g. no window object, or
    /// storage access is denied).
    #[error("session storage is unavailable")]
    Unavailable,

    /// The backing storage rejected a write (e.g. quota exceeded).
    #[error("session storage rejected write: {0}")]
    Write(String),
}

/// Abstraction over the persisted session token.
///
/// Implementations are synchronous snapshots; nothing subscribes to token
/// changes, so a consumer sees the value as of its own read.
pub trait SessionStore {
    /// The current token, or `None` when absent. Empty and whitespace-only
    /// values count as absent.
    fn token(&self) -> Option<String>;

    /// Persist `token` verbatim, replacing any previous value.
    fn set_token(&self, token: &str) -> Result<(), SessionError>;

    /// Remove the persisted token. No UI path invokes this today; the
    /// interface carries it so a sign-out path can be added without
    /// changing consumers.
    fn clear(&self) -> Result<(), SessionError>;

    fn has_token(&self) -> bool {
        self.token().is_some()
    }
}

/// Normalize a raw stored value into token presence semantics.
pub fn normalize_token(raw: Option<String>) -> Option<String> {
    raw.filter(|token| !token.trim().is_empty())
}

/// In-memory [`SessionStore`] for tests and non-browser targets.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.token.replace(Some(token.to_string()));
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        normalize_token(self.token.borrow().clone())
    }

    fn set_token(&self, token: &str) -> Result<(), SessionError> {
        self.token.replace(Some(token.to_string()));
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.token.replace(None);
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_token_reads_as_none() {
        let store = MemorySessionStore::new();
        assert_eq!(store.token(), None);
        assert!(!store.has_token());
    }

    #[test]
    fn set_then_read_round_trips() {
        let store = MemorySessionStore::new();
        store.set_token("abc123").unwrap();

        assert_eq!(store.token().as_deref(), Some("abc123"));
        assert!(store.has_token());
    }

    #[test]
    fn empty_and_whitespace_tokens_count_as_absent() {
        let store = MemorySessionStore::new();

        store.set_token("").unwrap();
        assert!(!store.has_token());

        store.set_token("   ").unwrap();
        assert!(!store.has_token());
    }

    #[test]
    fn clear_removes_the_token() {
        let store = MemorySessionStore::with_token("abc123");
        assert!(store.has_token());

        store.clear().unwrap();
        assert_eq!(store.token(), None);
    }

    #[test]
    fn normalize_keeps_raw_value_intact() {
        // Presence is checked on the trimmed value, but the token itself is
        // never altered.
        let token = normalize_token(Some("  abc  ".to_string()));
        assert_eq!(token.as_deref(), Some("  abc  "));
    }
}
