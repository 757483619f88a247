//! Report endpoints - low stock and staff share

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use mnhs_core::models::{LowStockRow, StaffShare};

use crate::http::error::ApiError;
use crate::http::response::ListResponse;
use crate::http::server::AppState;

/// GET /api/low_stock - medications out of or low on stock
async fn low_stock(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListResponse<LowStockRow>>, ApiError> {
    let rows = state.store.low_stock().await?;
    Ok(Json(ListResponse::new(rows)))
}

/// GET /api/staff_share - appointment share per staff member
async fn staff_share(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListResponse<StaffShare>>, ApiError> {
    let rows = state.store.staff_share().await?;
    Ok(Json(ListResponse::new(rows)))
}

/// Report routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/low_stock", get(low_stock))
        .route("/api/staff_share", get(staff_share))
}
