//! Dashboard authentication guard
//!
//! Disabled unless `pages.dashboard_guard` is set. When active, dashboard
//! requests without the session cookie are redirected to the login page.

use axum::http::{header, HeaderMap};

use crate::config::PagesConfig;

/// Session-cookie presence check
#[derive(Debug, Clone)]
pub struct AuthGuard {
    cookie_name: String,
}

impl AuthGuard {
    pub fn new(cookie_name: impl Into<String>) -> Self {
        Self {
            cookie_name: cookie_name.into(),
        }
    }

    /// Guard for the dashboard layout, `None` when disabled
    pub fn from_config(config: &PagesConfig) -> Option<Self> {
        config
            .dashboard_guard
            .then(|| Self::new(config.session_cookie.clone()))
    }

    /// True when a non-empty session cookie is present
    pub fn is_authenticated(&self, headers: &HeaderMap) -> bool {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .any(|(name, value)| name == self.cookie_name && !value.is_empty())
    }
}
