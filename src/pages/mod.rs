//! Server-rendered pages
//!
//! - **routes**: static page route table
//! - **layout**: shared chrome and the product ordering provider
//! - **title**: `<title>` composition from the app name
//! - **guard**: optional dashboard authentication guard
//!
//! Pages render a placeholder heading in their layout. Unknown paths get
//! the not-found page with status 404.

pub mod guard;
pub mod layout;
pub mod routes;
pub mod title;

pub use guard::AuthGuard;
pub use layout::{escape_html, Layout, LayoutContext};
pub use routes::{not_found_route, page_routes, PageRoute, AUTH_PROVIDERS, LOGIN_PATH};
pub use title::{document_title, Title};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::api::{ApiResult, AppState};

/// Router with one GET route per page
pub fn router() -> Router<Arc<AppState>> {
    page_routes().into_iter().fold(Router::new(), |router, route| {
        let path = route.path.clone();
        let route = Arc::new(route);

        router.route(
            &path,
            get(move |State(state): State<Arc<AppState>>, headers: HeaderMap| {
                let route = Arc::clone(&route);
                async move { render_page(&state, &route, &headers) }
            }),
        )
    })
}

/// Fallback for unknown paths
pub async fn not_found(State(state): State<Arc<AppState>>) -> ApiResult<(StatusCode, Html<String>)> {
    let html = render_html(&state, &not_found_route())?;
    Ok((StatusCode::NOT_FOUND, Html(html)))
}

fn render_page(state: &AppState, route: &PageRoute, headers: &HeaderMap) -> ApiResult<Response> {
    if route.layout == Layout::Dashboard {
        if let Some(guard) = &state.guard {
            if !guard.is_authenticated(headers) {
                tracing::debug!(path = %route.path, "Dashboard guard redirecting to login");
                return Ok(Redirect::to(LOGIN_PATH).into_response());
            }
        }
    }

    Ok(Html(render_html(state, route)?).into_response())
}

fn render_html(state: &AppState, route: &PageRoute) -> ApiResult<String> {
    let app_name = state.config.app.name.as_str();
    let title = document_title(route.title.as_ref(), app_name);

    let ordering = if route.layout.needs_ordering_context() {
        Some(state.store.list_active_special_requests()?)
    } else {
        None
    };

    let ctx = LayoutContext {
        app_name,
        document_title: &title,
        ordering: ordering.as_deref(),
    };

    let body = format!("<h1>{}</h1>", escape_html(&route.heading));
    Ok(layout::render(route.layout, &ctx, &body))
}
