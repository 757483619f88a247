//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown
//! - JSON envelope for success and error responses

pub mod error;
pub mod extractors;
pub mod response;
pub mod routes;
pub mod server;

#[cfg(test)]
pub(crate) mod fake;

pub use error::ApiError;
pub use response::ListResponse;
pub use server::{router, run_server, AppState, ServerConfig, ServerError};
