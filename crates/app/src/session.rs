//! Browser-backed session store (`localStorage`).

use orgdesk_auth::{normalize_token, SessionError, SessionStore, TOKEN_KEY};

/// `localStorage`-backed [`SessionStore`].
///
/// Storage access can fail (no window object, storage disabled by the
/// browser); reads degrade to "no token", writes surface a [`SessionError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSession;

impl BrowserSession {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, SessionError> {
        web_sys::window()
            .ok_or(SessionError::Unavailable)?
            .local_storage()
            .map_err(|_| SessionError::Unavailable)?
            .ok_or(SessionError::Unavailable)
    }
}

impl SessionStore for BrowserSession {
    fn token(&self) -> Option<String> {
        let storage = Self::storage().ok()?;
        normalize_token(storage.get_item(TOKEN_KEY).ok().flatten())
    }

    fn set_token(&self, token: &str) -> Result<(), SessionError> {
        Self::storage()?
            .set_item(TOKEN_KEY, token)
            .map_err(|e| SessionError::Write(format!("{e:?}")))
    }

    fn clear(&self) -> Result<(), SessionError> {
        Self::storage()?
            .remove_item(TOKEN_KEY)
            .map_err(|e| SessionError::Write(format!("{e:?}")))
    }
}
