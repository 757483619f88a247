//! Staff lookup and workload rows

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Staff dropdown entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct StaffMember {
    #[serde(rename = "STAFF_ID")]
    pub staff_id: i32,
    #[serde(rename = "FullName")]
    pub full_name: String,
}

/// A staff member's appointment count and share of their hospital's total.
///
/// `percentage_share` is `None` when the hospital total is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct StaffShare {
    #[serde(rename = "STAFF_ID")]
    pub staff_id: i32,
    #[serde(rename = "FullName")]
    pub full_name: String,
    #[serde(rename = "HospitalName")]
    pub hospital_name: String,
    #[serde(rename = "TotalAppointments")]
    pub total_appointments: i64,
    #[serde(rename = "PercentageShare")]
    pub percentage_share: Option<f64>,
}
