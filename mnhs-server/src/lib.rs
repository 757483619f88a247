//! mnhs-server: JSON API over the MNHS records store
//!
//! Every route runs one [`mnhs_core::RecordStore`] operation and wraps the
//! result in the `{success, data|error, count?}` envelope.

pub mod http;

pub use http::{router, run_server, ApiError, AppState, ListResponse, ServerConfig, ServerError};
