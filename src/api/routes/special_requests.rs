//! Special Request Routes
//!
//! - GET /api/special-requests - Active options as `{id, label, value}`, ordered by sort then id

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::store::SpecialRequestOption;

/// GET /api/special-requests
///
/// Always 200 with an array, empty when nothing is active.
pub async fn list_special_requests(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<SpecialRequestOption>>> {
    let options = state.store.list_active_special_requests()?;
    Ok(Json(options))
}
