//! Command implementations for the mnhs CLI
//!
//! Each command runs one store operation and returns the text to print,
//! either plain text or the same JSON envelope the HTTP API sends.

pub mod appointments;
pub mod lookups;
pub mod patients;
pub mod reports;
pub mod serve;

// Re-export main dispatcher functions for flat access from main.rs
pub use appointments::run_schedule_appt;
pub use lookups::{run_departments, run_staff};
pub use patients::{run_add_patient, run_list_patients};
pub use reports::{run_low_stock, run_staff_share};
pub use serve::run_serve;

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}
