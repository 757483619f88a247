//! Patient endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use mnhs_core::models::{NewPatient, PatientSummary, DEFAULT_PATIENT_LIMIT};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ApiQuery};
use crate::http::response::{ListResponse, PatientCreated};
use crate::http::server::AppState;

/// Query parameters for the listing
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Max patients to return (default 20)
    pub limit: Option<u32>,
}

/// GET /api/patients - patients ordered by surname
async fn list_patients(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<ListResponse<PatientSummary>>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_PATIENT_LIMIT);
    let patients = state.store.list_patients(limit).await?;
    Ok(Json(ListResponse::new(patients)))
}

/// POST /api/patients - add a patient
async fn create_patient(
    State(state): State<Arc<AppState>>,
    ApiJson(patient): ApiJson<NewPatient>,
) -> Result<Json<PatientCreated>, ApiError> {
    let iid = state
        .store
        .insert_patient(&patient)
        .await
        .map_err(ApiError::from_write)?;

    Ok(Json(PatientCreated::new(iid)))
}

/// Patient routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/patients", get(list_patients).post(create_patient))
}
