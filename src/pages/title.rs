//! Page titles
//!
//! Declared titles are composed with the application name:
//!
//! ```text
//! Title::page("About Us")                 -> "About Us - Orderdesk"
//! Title::qualified("Login", "Firebase")   -> "Login | Firebase - Orderdesk"
//! ```

use std::fmt;

/// Page-specific part of a document title
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Title {
    /// `"<page> - <app>"`
    Page(String),
    /// `"<page> | <qualifier> - <app>"`
    Qualified { page: String, qualifier: String },
}

impl Title {
    pub fn page(page: impl Into<String>) -> Self {
        Title::Page(page.into())
    }

    pub fn qualified(page: impl Into<String>, qualifier: impl Into<String>) -> Self {
        Title::Qualified {
            page: page.into(),
            qualifier: qualifier.into(),
        }
    }

    /// Full title with the application name appended
    pub fn compose(&self, app_name: &str) -> String {
        format!("{} - {}", self, app_name)
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Title::Page(page) => write!(f, "{}", page),
            Title::Qualified { page, qualifier } => write!(f, "{} | {}", page, qualifier),
        }
    }
}

/// `<title>` text for a page; undeclared titles fall back to the app name
pub fn document_title(title: Option<&Title>, app_name: &str) -> String {
    match title {
        Some(title) => title.compose(app_name),
        None => app_name.to_string(),
    }
}
