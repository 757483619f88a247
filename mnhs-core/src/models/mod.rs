//! Row and request types for the records schema
//!
//! Serialized field names keep the column spellings the web client has
//! always received (`IID`, `FullName`, ...), independent of how the
//! Postgres columns are cased.

pub mod appointment;
pub mod department;
pub mod patient;
pub mod staff;
pub mod stock;

pub use appointment::{AppointmentRecord, AppointmentRequest, DEFAULT_REASON, STATUS_SCHEDULED};
pub use department::Department;
pub use patient::{NewPatient, PatientSummary, DEFAULT_PATIENT_LIMIT};
pub use staff::{StaffMember, StaffShare};
pub use stock::{LowStockRow, StockStatus};
