//! Organization settings as captured by the management form.

use serde::{Deserialize, Serialize};

use crate::FieldErrors;

/// The organization record as submitted by the form.
///
/// Both fields are required non-empty after trimming. No uniqueness or
/// identity lifecycle is enforced at this layer; submission is delegated to
/// the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationDraft {
    pub name: String,
    pub organization_id: String,
}

impl OrganizationDraft {
    pub fn new(name: impl Into<String>, organization_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            organization_id: organization_id.into(),
        }
    }

    /// Apply the required-field rules. An empty map means the draft may be
    /// submitted.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Name is required");
        errors.require(
            "organization_id",
            &self.organization_id,
            "Organization ID is required",
        );
        errors
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_draft_passes_validation() {
        let draft = OrganizationDraft::new("Acme Corp", "acme-01");
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn empty_name_is_reported() {
        let draft = OrganizationDraft::new("", "acme-01");
        let errors = draft.validate();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("organization_id"), None);
    }

    #[test]
    fn whitespace_only_id_is_reported() {
        let draft = OrganizationDraft::new("Acme Corp", "  \t ");
        let errors = draft.validate();

        assert_eq!(errors.get("organization_id"), Some("Organization ID is required"));
    }

    #[test]
    fn both_fields_empty_reports_both() {
        let errors = OrganizationDraft::default().validate();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("organization_id"), Some("Organization ID is required"));
    }

    #[test]
    fn values_are_submitted_untrimmed() {
        // Validation trims for the emptiness check only; the draft keeps the
        // raw field values.
        let draft = OrganizationDraft::new(" Acme ", "acme-01");
        assert!(draft.validate().is_empty());
        assert_eq!(draft.name, " Acme ");
    }
}
