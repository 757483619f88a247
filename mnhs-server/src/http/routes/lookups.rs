//! Dropdown lookups - departments and staff

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use mnhs_core::models::{Department, StaffMember};

use crate::http::error::ApiError;
use crate::http::response::ListResponse;
use crate::http::server::AppState;

/// GET /api/departments
async fn departments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListResponse<Department>>, ApiError> {
    let rows = state.store.departments().await?;
    Ok(Json(ListResponse::new(rows)))
}

/// GET /api/staff
async fn staff(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListResponse<StaffMember>>, ApiError> {
    let rows = state.store.staff().await?;
    Ok(Json(ListResponse::new(rows)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/departments", get(departments))
        .route("/api/staff", get(staff))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use mnhs_core::models::{Department, StaffMember};

    use crate::http::fake::FakeStore;
    use crate::http::routes::test_support::{get, send};

    #[tokio::test]
    async fn lookups_use_column_names() {
        let store = Arc::new(FakeStore {
            departments: vec![Department {
                dep_id: 1,
                name: "Cardiology".into(),
            }],
            staff: vec![StaffMember {
                staff_id: 7,
                full_name: "Dr. Leila Fassi".into(),
            }],
            ..FakeStore::default()
        });

        let (status, body) = send(store.clone(), get("/api/departments")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["DEP_ID"], 1);
        assert_eq!(body["data"][0]["Name"], "Cardiology");

        let (status, body) = send(store, get("/api/staff")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["STAFF_ID"], 7);
        assert_eq!(body["count"], 1);
    }
}
