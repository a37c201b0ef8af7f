//! Layouts
//!
//! Shared chrome wrapped around page bodies:
//!
//! - `Minimal`: bare document (auth pages)
//! - `Main`: site header and footer (content pages)
//! - `Dashboard`: sidebar + header shell
//! - `Product`: main shell plus the product ordering context provider

use crate::store::SpecialRequestOption;

/// Layout wrapping a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Minimal,
    Main,
    Dashboard,
    Product,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Minimal => "minimal",
            Layout::Main => "main",
            Layout::Dashboard => "dashboard",
            Layout::Product => "product",
        }
    }

    /// Whether rendering needs the ordering context loaded from the store
    pub fn needs_ordering_context(&self) -> bool {
        matches!(self, Layout::Product)
    }
}

/// Per-request inputs to a layout
pub struct LayoutContext<'a> {
    pub app_name: &'a str,
    pub document_title: &'a str,
    /// Active special-request options for the product ordering provider
    pub ordering: Option<&'a [SpecialRequestOption]>,
}

const DASHBOARD_LINKS: [(&str, &str); 6] = [
    ("/dashboard/default", "Overview"),
    ("/dashboard/analytics", "Analytics"),
    ("/dashboard/user/profile", "Profile"),
    ("/dashboard/user/cards", "Cards"),
    ("/dashboard/user/create", "Create User"),
    ("/dashboard/invoice/create", "Create Invoice"),
];

const MAIN_LINKS: [(&str, &str); 3] = [
    ("/product", "Products"),
    ("/faqs", "FAQs"),
    ("/about-us", "About Us"),
];

/// Wrap `body` (already-escaped HTML) in the layout's chrome
pub fn render(layout: Layout, ctx: &LayoutContext<'_>, body: &str) -> String {
    let content = match layout {
        Layout::Minimal => format!("<main class=\"auth\">{}</main>", body),
        Layout::Main => main_shell(ctx.app_name, body),
        Layout::Dashboard => dashboard_shell(ctx.app_name, body),
        Layout::Product => {
            let provider = ordering_provider(ctx.ordering.unwrap_or(&[]), body);
            main_shell(ctx.app_name, &provider)
        }
    };

    document(ctx.document_title, layout, &content)
}

fn document(title: &str, layout: Layout, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{}</title>\n\
         </head>\n\
         <body data-layout=\"{}\">\n{}\n</body>\n\
         </html>\n",
        escape_html(title),
        layout.as_str(),
        content
    )
}

fn nav_links(links: &[(&str, &str)]) -> String {
    links
        .iter()
        .map(|(href, label)| format!("<a href=\"{}\">{}</a>", href, escape_html(label)))
        .collect::<Vec<_>>()
        .join("")
}

fn main_shell(app_name: &str, body: &str) -> String {
    format!(
        "<header class=\"site-header\"><a class=\"brand\" href=\"/\">{app}</a><nav>{links}</nav></header>\n\
         <main class=\"site-main\">{body}</main>\n\
         <footer class=\"site-footer\">&copy; {app}</footer>",
        app = escape_html(app_name),
        links = nav_links(&MAIN_LINKS),
        body = body
    )
}

fn dashboard_shell(app_name: &str, body: &str) -> String {
    format!(
        "<div class=\"dashboard\">\n\
         <aside class=\"sidebar\"><nav>{links}</nav></aside>\n\
         <div class=\"dashboard-body\">\n\
         <header class=\"dashboard-header\">{app}</header>\n\
         <main class=\"dashboard-main\">{body}</main>\n\
         </div>\n\
         </div>",
        links = nav_links(&DASHBOARD_LINKS),
        app = escape_html(app_name),
        body = body
    )
}

fn ordering_provider(options: &[SpecialRequestOption], body: &str) -> String {
    format!(
        "<div data-provider=\"product-ordering\">\n\
         <script type=\"application/json\" id=\"ordering-context\">{}</script>\n\
         {}\n\
         </div>",
        ordering_json(options),
        body
    )
}

/// Ordering context payload, safe to embed in a `<script>` element
pub fn ordering_json(options: &[SpecialRequestOption]) -> String {
    let json = serde_json::json!({ "specialRequests": options });
    json.to_string().replace("</", "<\\/")
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
