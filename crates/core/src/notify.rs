//! Transient user-facing notification model.
//!
//! A notification is owned by a view, shown in a dismissible snackbar, and
//! auto-hidden after a fixed duration or on manual close.

use serde::{Deserialize, Serialize};

/// How long a notification stays on screen before auto-dismissing.
pub const NOTIFICATION_AUTO_HIDE_MS: u32 = 4_000;

/// Notification severity, mapped to the snackbar's visual treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Success,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Success => "success",
        }
    }
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transient, dismissible message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub visible: bool,
}

impl Notification {
    /// The hidden resting state (nothing to show).
    pub fn hidden() -> Self {
        Self {
            message: String::new(),
            severity: Severity::Info,
            visible: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::show(message, Severity::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::show(message, Severity::Warning)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::show(message, Severity::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::show(message, Severity::Success)
    }

    fn show(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            visible: true,
        }
    }

    /// Hide the notification, keeping the message for the fade-out.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}

impl Default for Notification {
    fn default() -> Self {
        Self::hidden()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_severity_and_visibility() {
        let n = Notification::error("Server error");
        assert!(n.visible);
        assert_eq!(n.severity, Severity::Error);
        assert_eq!(n.message, "Server error");

        let n = Notification::success("Organization saved");
        assert!(n.visible);
        assert_eq!(n.severity, Severity::Success);
    }

    #[test]
    fn default_is_hidden() {
        let n = Notification::default();
        assert!(!n.visible);
        assert!(n.message.is_empty());
    }

    #[test]
    fn dismiss_hides_without_dropping_message() {
        let mut n = Notification::warning("Heads up");
        n.dismiss();
        assert!(!n.visible);
        assert_eq!(n.message, "Heads up");
    }

    #[test]
    fn severity_display_is_lowercase() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Success.as_str(), "success");
    }
}
