//! API Routes
//!
//! Route handlers organized by functionality.

pub mod health;
pub mod order_confirmations;
pub mod special_requests;

use crate::api::error::ApiError;

/// Fallback for unmatched `/api/*` paths
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
