//! `orgdesk-core` — client-domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no browser or network
//! concerns): the field-error map shared by forms, the transient
//! notification model, and the organization draft with its validation rule.

pub mod field_error;
pub mod notify;
pub mod organization;

pub use field_error::FieldErrors;
pub use notify::{Notification, Severity, NOTIFICATION_AUTO_HIDE_MS};
pub use organization::OrganizationDraft;
