//! Appointment scheduling types
//!
//! An appointment is one `clinical_activity` row plus one `appointment`
//! row sharing the same CAID. CAID is the only key; there is no separate
//! appointment id.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Reason recorded when the caller gives none
pub const DEFAULT_REASON: &str = "General Consultation";

/// Status every new appointment starts in
pub const STATUS_SCHEDULED: &str = "Scheduled";

/// Request to schedule an appointment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub caid: i32,
    pub iid: i32,
    pub staff_id: i32,
    pub dep_id: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(default)]
    pub reason: Option<String>,
}

impl AppointmentRequest {
    /// Reason to store, falling back to [`DEFAULT_REASON`].
    pub fn reason(&self) -> &str {
        self.reason.as_deref().unwrap_or(DEFAULT_REASON)
    }
}

/// A scheduled appointment joined with its clinical activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct AppointmentRecord {
    pub caid: i32,
    pub iid: i32,
    pub staff_id: i32,
    pub dep_id: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub reason: Option<String>,
    pub status: String,
}
