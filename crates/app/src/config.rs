//! Build-time client configuration.
//!
//! The API host is baked in at compile time and supplied through the build
//! environment; there is no runtime configuration surface.

/// Default API host for local development.
const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Base URL of the backend API, fixed at build time via `ORGDESK_API_URL`.
pub fn api_base_url() -> &'static str {
    option_env!("ORGDESK_API_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

/// Login endpoint for an API host.
pub fn login_url(base_url: &str) -> String {
    format!("{}/login", base_url.trim_end_matches('/'))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_url_joins_the_path() {
        assert_eq!(login_url("http://api.test"), "http://api.test/login");
    }

    #[test]
    fn login_url_tolerates_trailing_slash() {
        assert_eq!(login_url("http://api.test/"), "http://api.test/login");
    }

    #[test]
    fn base_url_has_a_default() {
        assert!(!api_base_url().is_empty());
    }
}
