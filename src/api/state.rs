//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::config::Config;
use crate::pages::AuthGuard;
use crate::store::Store;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Relational store for order confirmations and special requests
    pub store: Store,
    /// Loaded configuration
    pub config: Arc<Config>,
    /// Dashboard guard, `None` when disabled
    pub guard: Option<AuthGuard>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: Store, config: Config) -> Self {
        let guard = AuthGuard::from_config(&config.pages);
        Self {
            store,
            config: Arc::new(config),
            guard,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
