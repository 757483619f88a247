//! Database layer - per-operation connections and repositories
//!
//! # Design Principles
//!
//! - One connection per operation, closed when it finishes (no pool)
//! - Rely on DB constraints, surface their errors unchanged
//! - Transactions with explicit rollback for writes

pub mod database;
pub mod repos;

pub use database::Database;
pub use repos::*;
