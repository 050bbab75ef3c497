//! `orgdesk-auth` — pure client-side authentication boundary.
//!
//! This crate is intentionally decoupled from HTTP and browser storage: it
//! defines the session-store abstraction, the route-guard policy, and the
//! classification of sign-in responses. The `app` crate wires these to
//! `localStorage` and `fetch`.

pub mod classify;
pub mod credentials;
pub mod guard;
pub mod session;

pub use classify::{classify_response, SignInError, DEFAULT_FAILURE_MESSAGE};
pub use credentials::Credentials;
pub use guard::{GuardDecision, GuardPolicy, LANDING_ROUTE, SIGN_IN_ROUTE};
pub use session::{normalize_token, MemorySessionStore, SessionError, SessionStore, TOKEN_KEY};
