//! Order Confirmation Routes
//!
//! - GET /api/admin/order-confirmations/:order_id - Look up a confirmation by order id

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::store::OrderConfirmation;

/// GET /api/admin/order-confirmations/:order_id
///
/// Returns the stored record verbatim, or 404 `{"error": "Not found"}`.
pub async fn get_order_confirmation(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<OrderConfirmation>> {
    let order_id = parse_order_id(&raw_id)?;

    let order = state
        .store
        .find_order_confirmation(order_id)?
        .ok_or(ApiError::NotFound)?;

    tracing::debug!(order_id, "Order confirmation found");
    Ok(Json(order))
}

/// Coerce the path segment to an integer order id
///
/// Numeric notation is accepted (`1.0`, `1e3`, `+5`) as long as the value is
/// finite, integral and within `i64`.
fn parse_order_id(raw: &str) -> ApiResult<i64> {
    let invalid = || ApiError::Validation(format!("Invalid order id: {}", raw));

    let value = raw.trim().parse::<f64>().map_err(|_| invalid())?;

    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    if !value.is_finite()
        || value.fract() != 0.0
        || value < i64::MIN as f64
        || value >= i64::MAX as f64
    {
        return Err(invalid());
    }

    Ok(value as i64)
}
