//! Per-field validation errors.
//!
//! Both the sign-in view and the organization form render errors inline
//! under the offending input. The map is transient: it is cleared on every
//! new submission attempt, and a single entry is cleared as soon as the user
//! edits that field again.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from field name to a human-readable message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`, replacing any previous one.
    pub fn set(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// Required-field rule: record `message` when `value` is empty after
    /// trimming whitespace.
    pub fn require(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.set(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Clear the error for a single field, leaving the others intact.
    pub fn clear_field(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_records_empty_and_whitespace_values() {
        let mut errors = FieldErrors::new();
        errors.require("name", "", "Name is required");
        errors.require("organization_id", "   \t", "Organization ID is required");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(
            errors.get("organization_id"),
            Some("Organization ID is required")
        );
    }

    #[test]
    fn require_passes_non_empty_values() {
        let mut errors = FieldErrors::new();
        errors.require("name", "Acme", "Name is required");

        assert!(errors.is_empty());
        assert_eq!(errors.get("name"), None);
    }

    #[test]
    fn clear_field_leaves_other_entries_intact() {
        let mut errors = FieldErrors::new();
        errors.set("email", "Invalid email");
        errors.set("password", "Too short");

        errors.clear_field("email");

        assert_eq!(errors.get("email"), None);
        assert_eq!(errors.get("password"), Some("Too short"));
    }

    #[test]
    fn set_replaces_previous_message() {
        let mut errors = FieldErrors::new();
        errors.set("email", "first");
        errors.set("email", "second");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("second"));
    }
}
