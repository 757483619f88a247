//! Repository implementations for database access
//!
//! Each repository borrows one open connection for its lifetime. Writes
//! that touch more than one row run in a transaction and roll back
//! explicitly before the error is handed back.

pub mod appointments;
pub mod departments;
pub mod patients;
pub mod staff;
pub mod stock;

pub use appointments::AppointmentRepo;
pub use departments::DepartmentRepo;
pub use patients::PatientRepo;
pub use staff::StaffRepo;
pub use stock::StockRepo;

use sqlx::{Postgres, Transaction};

use crate::error::MnhsError;

/// Roll back after `cause`, logging (not returning) a failed rollback so
/// the caller still sees the original error.
pub(crate) async fn rollback(tx: Transaction<'_, Postgres>, cause: &MnhsError) {
    tracing::debug!(error = %cause, "rolling back transaction");
    if let Err(e) = tx.rollback().await {
        tracing::error!(error = %e, "rollback failed");
    }
}
