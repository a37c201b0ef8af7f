//! Page route table
//!
//! Every page renders a placeholder heading. `view` names the feature view
//! the page is meant to host; it is listed by `orderdesk routes` but not
//! rendered.

use crate::pages::layout::Layout;
use crate::pages::title::Title;

/// Authentication provider variants, as `(slug, display name)`
pub const AUTH_PROVIDERS: [(&str, &str); 5] = [
    ("amplify", "Amplify"),
    ("auth0", "Auth0"),
    ("firebase", "Firebase"),
    ("jwt", "JWT"),
    ("supabase", "Supabase"),
];

/// Where the dashboard guard sends unauthenticated requests
pub const LOGIN_PATH: &str = "/auth/jwt/login";

/// Auth pages offered by every provider, as `(slug, heading, view)`
const AUTH_PAGES: [(&str, &str, &str); 5] = [
    ("login", "Login", "AuthLogin"),
    ("register", "Register", "AuthRegister"),
    ("forgot-password", "Forgot Password", "AuthForgotPassword"),
    ("reset-password", "Reset Password", "AuthResetPassword"),
    ("code-verification", "Code Verification", "AuthCodeVerification"),
];

/// A static page route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRoute {
    pub path: String,
    pub layout: Layout,
    pub title: Option<Title>,
    /// Placeholder heading rendered in place of the view
    pub heading: String,
    /// Intended feature view
    pub view: &'static str,
}

impl PageRoute {
    fn new(path: impl Into<String>, layout: Layout, heading: impl Into<String>, view: &'static str) -> Self {
        Self {
            path: path.into(),
            layout,
            title: None,
            heading: heading.into(),
            view,
        }
    }

    fn title(mut self, title: Title) -> Self {
        self.title = Some(title);
        self
    }
}

/// All page routes in registration order
pub fn page_routes() -> Vec<PageRoute> {
    let mut routes = Vec::new();

    for (slug, provider) in AUTH_PROVIDERS {
        for (page, heading, view) in AUTH_PAGES {
            routes.push(
                PageRoute::new(format!("/auth/{}/{}", slug, page), Layout::Minimal, heading, view)
                    .title(Title::qualified(heading, provider)),
            );
        }
    }

    for &(page, heading, view) in &AUTH_PAGES[..3] {
        routes.push(
            PageRoute::new(format!("/demo/{}", page), Layout::Minimal, heading, view)
                .title(Title::page(heading)),
        );
    }

    routes.extend([
        PageRoute::new("/dashboard/default", Layout::Dashboard, "Overview", "DashboardOverview")
            .title(Title::qualified("Overview", "Dashboard")),
        PageRoute::new("/dashboard/analytics", Layout::Dashboard, "Analytics", "DashboardAnalytics")
            .title(Title::qualified("Analytics", "Dashboard")),
        PageRoute::new("/dashboard/user/profile", Layout::Dashboard, "Profile", "UserProfile")
            .title(Title::qualified("Profile", "User")),
        PageRoute::new("/dashboard/user/cards", Layout::Dashboard, "Cards", "UserCards")
            .title(Title::qualified("Cards", "User")),
        PageRoute::new("/dashboard/user/create", Layout::Dashboard, "Create User", "UserCreate")
            .title(Title::qualified("Create", "User")),
        PageRoute::new("/dashboard/invoice/create", Layout::Dashboard, "Create Invoice", "InvoiceCreate")
            .title(Title::qualified("Create", "Invoice")),
        PageRoute::new("/product", Layout::Product, "Products", "ProductList"),
        PageRoute::new("/product/checkout", Layout::Product, "Checkout", "ProductCheckout")
            .title(Title::qualified("Checkout", "Product")),
        PageRoute::new("/about-us", Layout::Main, "About Us", "AboutUs").title(Title::page("About Us")),
        PageRoute::new("/faqs", Layout::Main, "FAQs", "Faqs").title(Title::page("FAQs")),
    ]);

    routes
}

/// Page rendered for unknown paths
pub fn not_found_route() -> PageRoute {
    PageRoute::new("/404", Layout::Main, "Page Not Found", "NotFound")
        .title(Title::page("Page Not Found"))
}
