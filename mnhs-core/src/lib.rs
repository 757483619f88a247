//! mnhs-core: data access for the MNHS hospital records application
//!
//! Exposes the [`RecordStore`] seam, its Postgres implementation
//! [`Database`], the row types it returns, and connection settings.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod store;

pub use config::DbConfig;
pub use db::Database;
pub use error::{MnhsError, Result};
pub use store::RecordStore;
