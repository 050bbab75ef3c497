//! Route-guard policy.
//!
//! A guard decides, per render, whether to show its children or redirect.
//! The decision is a pure function of token presence:
//!
//! - No IO
//! - No panics
//! - No reactivity (a full reload is required after external token mutation)

/// Authenticated landing route.
pub const LANDING_ROUTE: &str = "/";

/// Sign-in route, target of the authenticated-only guard.
pub const SIGN_IN_ROUTE: &str = "/sign-in";

/// Which kind of route the guard protects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardPolicy {
    /// Pages only meaningful for signed-out users (sign-in, registration).
    GuestOnly,
    /// Pages requiring an authenticated session.
    RequireAuth,
}

/// Outcome of evaluating a guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the guarded children.
    Allow,
    /// Navigate to the given route, replacing the history entry.
    Redirect(&'static str),
}

impl GuardPolicy {
    pub fn decide(self, authenticated: bool) -> GuardDecision {
        match (self, authenticated) {
            (GuardPolicy::GuestOnly, true) => GuardDecision::Redirect(LANDING_ROUTE),
            (GuardPolicy::GuestOnly, false) => GuardDecision::Allow,
            (GuardPolicy::RequireAuth, true) => GuardDecision::Allow,
            (GuardPolicy::RequireAuth, false) => GuardDecision::Redirect(SIGN_IN_ROUTE),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemorySessionStore, SessionStore};
    use proptest::prelude::*;

    #[test]
    fn guest_guard_redirects_authenticated_users_to_landing() {
        assert_eq!(
            GuardPolicy::GuestOnly.decide(true),
            GuardDecision::Redirect(LANDING_ROUTE)
        );
    }

    #[test]
    fn guest_guard_allows_signed_out_users() {
        assert_eq!(GuardPolicy::GuestOnly.decide(false), GuardDecision::Allow);
    }

    #[test]
    fn auth_guard_redirects_signed_out_users_to_sign_in() {
        assert_eq!(
            GuardPolicy::RequireAuth.decide(false),
            GuardDecision::Redirect(SIGN_IN_ROUTE)
        );
    }

    #[test]
    fn auth_guard_allows_authenticated_users() {
        assert_eq!(GuardPolicy::RequireAuth.decide(true), GuardDecision::Allow);
    }

    proptest! {
        // Presence in the store implies the authenticated guard renders
        // children and the guest guard redirects; absence is the exact
        // inverse, for any stored token value.
        #[test]
        fn token_presence_drives_both_guards(token in ".*") {
            let store = MemorySessionStore::new();
            store.set_token(&token).unwrap();

            let present = store.has_token();
            prop_assert_eq!(present, !token.trim().is_empty());

            match GuardPolicy::RequireAuth.decide(present) {
                GuardDecision::Allow => prop_assert!(present),
                GuardDecision::Redirect(to) => {
                    prop_assert!(!present);
                    prop_assert_eq!(to, SIGN_IN_ROUTE);
                }
            }

            match GuardPolicy::GuestOnly.decide(present) {
                GuardDecision::Allow => prop_assert!(!present),
                GuardDecision::Redirect(to) => {
                    prop_assert!(present);
                    prop_assert_eq!(to, LANDING_ROUTE);
                }
            }
        }
    }
}
