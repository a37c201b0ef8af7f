//! Orderdesk HTTP API
//!
//! HTTP layer for Orderdesk, built with Axum.
//!
//! # Endpoints
//!
//! ## Admin
//! - `GET /api/admin/order-confirmations/:order_id` - Look up an order confirmation
//!
//! ## Ordering
//! - `GET /api/special-requests` - Active special-request options
//!
//! Unmatched `/api/*` paths answer `404 {"error": "Not found"}`.
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## Pages
//! - Server-rendered page routes, see [`crate::pages`]
//!
//! # Example
//!
//! ```rust,no_run
//! use orderdesk::api::{serve, AppState};
//! use orderdesk::config::Config;
//! use orderdesk::store::Store;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let store = Store::open(&config.database.path)?;
//!     let api_config = config.api.clone();
//!
//!     serve(AppState::new(store, config), &api_config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ApiConfig;
use crate::pages;

/// Build the router with API, health and page routes
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/admin/order-confirmations/:order_id",
            get(routes::order_confirmations::get_order_confirmation),
        )
        .route(
            "/special-requests",
            get(routes::special_requests::list_special_requests),
        )
        .fallback(routes::not_found);

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .merge(pages::router())
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the HTTP server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Orderdesk listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Orderdesk shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::pages::{document_title, page_routes};
    use crate::store::{OrderConfirmation, SpecialRequest, Store};
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn sample_order() -> OrderConfirmation {
        OrderConfirmation::new(1042, "Ada Lovelace", "ada@example.com")
            .items(json!([{"sku": "bagel", "qty": 3, "priceCents": 250}]))
            .special_requests(json!(["toasted"]))
            .total_cents(750)
            .created_at(Utc.with_ymd_and_hms(2024, 3, 9, 8, 15, 0).unwrap())
    }

    fn seeded_store() -> Store {
        let store = Store::open_in_memory().unwrap();
        store.insert_order_confirmation(&sample_order()).unwrap();
        for req in [
            SpecialRequest::new(3, "Extra napkins", "extra-napkins", 2),
            SpecialRequest::new(1, "Toasted", "toasted", 1),
            SpecialRequest::new(2, "Retired", "retired", 0).inactive(),
            SpecialRequest::new(5, "Cut in half", "cut-in-half", 1),
            SpecialRequest::new(4, "No butter", "no-butter", 2),
        ] {
            store.insert_special_request(&req).unwrap();
        }
        store
    }

    fn create_test_app(store: Store, config: Config) -> Router {
        build_router(AppState::new(store, config))
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    async fn body_text(response: Response) -> String {
        String::from_utf8(body_bytes(response).await).unwrap()
    }

    fn extract_title(html: &str) -> &str {
        let start = html.find("<title>").unwrap() + "<title>".len();
        let end = html.find("</title>").unwrap();
        &html[start..end]
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app(Store::open_in_memory().unwrap(), Config::default());
        let response = get(app, "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let app = create_test_app(Store::open_in_memory().unwrap(), Config::default());
        let response = get(app, "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let app = create_test_app(Store::open_in_memory().unwrap(), Config::default());
        let response = get(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "ok");
    }

    #[tokio::test]
    async fn test_order_confirmation_found() {
        let app = create_test_app(seeded_store(), Config::default());
        let response = get(app, "/api/admin/order-confirmations/1042").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body, serde_json::to_value(sample_order()).unwrap());
        assert_eq!(body["orderId"], 1042);
        assert_eq!(body["items"][0]["sku"], "bagel");
    }

    #[tokio::test]
    async fn test_order_confirmation_not_found() {
        let app = create_test_app(seeded_store(), Config::default());
        let response = get(app, "/api/admin/order-confirmations/9999").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "Not found" }));
    }

    #[tokio::test]
    async fn test_order_confirmation_invalid_id() {
        let app = create_test_app(seeded_store(), Config::default());
        let response = get(app, "/api/admin/order-confirmations/abc").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "Invalid order id: abc" }));
    }

    #[tokio::test]
    async fn test_order_confirmation_numeric_notation() {
        let app = create_test_app(seeded_store(), Config::default());

        for uri in [
            "/api/admin/order-confirmations/1042.0",
            "/api/admin/order-confirmations/1.042e3",
        ] {
            let response = get(app.clone(), uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
            assert_eq!(body_json(response).await["orderId"], 1042);
        }

        let response = get(app, "/api/admin/order-confirmations/1042.5").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Invalid order id: 1042.5" })
        );
    }

    #[tokio::test]
    async fn test_store_failure_returns_json_500() {
        let store = seeded_store();
        store.drop_tables().unwrap();
        let app = create_test_app(store, Config::default());

        for uri in ["/api/special-requests", "/api/admin/order-confirmations/1"] {
            let response = get(app.clone(), uri).await;
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);

            let body = body_json(response).await;
            let message = body["error"].as_str().unwrap();
            assert!(message.starts_with("Database error"), "{}: {}", uri, message);
        }
    }

    #[tokio::test]
    async fn test_health_reports_store_failure() {
        let store = Store::open_in_memory().unwrap();
        store.drop_tables().unwrap();
        let app = create_test_app(store, Config::default());

        let response = get(app.clone(), "/health/ready").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = body_json(get(app, "/health").await).await;
        assert_eq!(body["status"], "unhealthy");
        assert_eq!(body["database"], "error");
    }

    #[tokio::test]
    async fn test_unknown_api_path_returns_json_404() {
        let app = create_test_app(seeded_store(), Config::default());

        for uri in ["/api/nope", "/api/admin/order-confirmations"] {
            let response = get(app.clone(), uri).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
            assert_eq!(body_json(response).await, json!({ "error": "Not found" }));
        }
    }

    #[tokio::test]
    async fn test_special_requests_active_and_ordered() {
        let app = create_test_app(seeded_store(), Config::default());
        let response = get(app, "/api/special-requests").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(
            body,
            json!([
                {"id": 1, "label": "Toasted", "value": "toasted"},
                {"id": 5, "label": "Cut in half", "value": "cut-in-half"},
                {"id": 3, "label": "Extra napkins", "value": "extra-napkins"},
                {"id": 4, "label": "No butter", "value": "no-butter"},
            ])
        );
    }

    #[tokio::test]
    async fn test_special_requests_empty() {
        let app = create_test_app(Store::open_in_memory().unwrap(), Config::default());
        let response = get(app, "/api/special-requests").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_every_page_title() {
        let mut config = Config::default();
        config.app.name = "Berry".to_string();
        let app = create_test_app(seeded_store(), config);

        for route in page_routes() {
            let response = get(app.clone(), &route.path).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", route.path);

            let html = body_text(response).await;
            let expected = document_title(route.title.as_ref(), "Berry");
            assert_eq!(extract_title(&html), expected, "{}", route.path);
            assert!(html.contains(&format!("<h1>{}</h1>", route.heading)));
        }
    }

    #[tokio::test]
    async fn test_page_title_formats() {
        let app = create_test_app(seeded_store(), Config::default());

        let html = body_text(get(app.clone(), "/auth/supabase/register").await).await;
        assert_eq!(extract_title(&html), "Register | Supabase - Orderdesk");

        let html = body_text(get(app.clone(), "/about-us").await).await;
        assert_eq!(extract_title(&html), "About Us - Orderdesk");

        let html = body_text(get(app, "/product").await).await;
        assert_eq!(extract_title(&html), "Orderdesk");
    }

    #[tokio::test]
    async fn test_product_page_has_ordering_context() {
        let app = create_test_app(seeded_store(), Config::default());
        let html = body_text(get(app, "/product/checkout").await).await;

        assert!(html.contains("id=\"ordering-context\""));
        assert!(html.contains("\"value\":\"toasted\""));
        assert!(!html.contains("retired"));
    }

    #[tokio::test]
    async fn test_dashboard_unguarded_by_default() {
        let app = create_test_app(seeded_store(), Config::default());
        let response = get(app, "/dashboard/invoice/create").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_dashboard_guard_redirects() {
        let mut config = Config::default();
        config.pages.dashboard_guard = true;
        let app = create_test_app(seeded_store(), config);

        let response = get(app.clone(), "/dashboard/default").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/auth/jwt/login"
        );

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/dashboard/default")
                    .header(header::COOKIE, "orderdesk_session=token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // guard only covers the dashboard layout
        let response = get(app, "/faqs").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_path_renders_not_found_page() {
        let app = create_test_app(seeded_store(), Config::default());
        let response = get(app, "/no/such/page").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let html = body_text(response).await;
        assert_eq!(extract_title(&html), "Page Not Found - Orderdesk");
    }
}
