//! Appointment scheduling endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use mnhs_core::models::AppointmentRequest;

use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::response::AppointmentScheduled;
use crate::http::server::AppState;

/// POST /api/schedule_appt - create activity + appointment atomically
async fn schedule_appointment(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<AppointmentRequest>,
) -> Result<Json<AppointmentScheduled>, ApiError> {
    let caid = state
        .store
        .schedule_appointment(&req)
        .await
        .map_err(ApiError::from_write)?;

    Ok(Json(AppointmentScheduled::new(caid)))
}

/// Appointment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/schedule_appt", post(schedule_appointment))
}
