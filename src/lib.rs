//! # Orderdesk
//!
//! Admin dashboard server: server-rendered page routes plus a small JSON API
//! over a SQLite store.
//!
//! ## Modules
//!
//! - [`store`]: SQLite store for order confirmations and special requests
//! - [`api`]: HTTP server with Axum (JSON routes, health, router assembly)
//! - [`pages`]: Page route table, layouts, titles and the dashboard guard
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: `tracing` subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use orderdesk::{build_router, AppState, Config, Store};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let store = Store::open_in_memory()?;
//!     let addr = config.api.addr();
//!
//!     let router = build_router(AppState::new(store, config));
//!     let listener = tokio::net::TcpListener::bind(addr).await?;
//!     axum::serve(listener, router).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod logging;
pub mod pages;
pub mod store;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiError, ApiResult, AppState};

pub use config::{
    generate_default_config, ApiConfig, AppConfig, Config, ConfigError, DatabaseConfig,
    LoggingConfig, PagesConfig,
};

pub use pages::{AuthGuard, Layout, PageRoute, Title};

pub use store::{
    OrderConfirmation, SpecialRequest, SpecialRequestOption, Store, StoreError, StoreResult,
};
