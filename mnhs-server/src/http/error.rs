//! API error type with IntoResponse
//!
//! Every failure renders as `{"success": false, "error": "<message>"}`.
//! The store's own message is passed through so callers see the
//! constraint or connection problem that stopped them.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mnhs_core::MnhsError;
use serde_json::json;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Body or query string could not be parsed (400)
    BadRequest { message: String },

    /// The database refused a write, e.g. a duplicate key (400)
    Rejected(MnhsError),

    /// Store unavailable or a read failed (500, logged)
    Store(MnhsError),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Classify a failed write: connection trouble stays a 500, anything
    /// the database itself rejected is the caller's 400.
    pub fn from_write(e: MnhsError) -> Self {
        if e.is_connection() {
            Self::Store(e)
        } else {
            Self::Rejected(e)
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } | Self::Rejected(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::BadRequest { message } => message.clone(),
            Self::Rejected(e) => {
                tracing::warn!("Write rejected: {}", e);
                e.to_string()
            }
            Self::Store(e) => {
                tracing::error!("Store error: {}", e);
                e.to_string()
            }
        };

        let body = json!({
            "success": false,
            "error": message
        });

        (status, Json(body)).into_response()
    }
}

impl From<MnhsError> for ApiError {
    fn from(e: MnhsError) -> Self {
        Self::Store(e)
    }
}
