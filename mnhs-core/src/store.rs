//! The data-access seam both transports talk to.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    AppointmentRequest, Department, LowStockRow, NewPatient, PatientSummary, StaffMember,
    StaffShare,
};

/// One method per use case. Implementations hold no state between calls.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Patients ordered by surname, at most `limit` of them.
    async fn list_patients(&self, limit: u32) -> Result<Vec<PatientSummary>>;

    /// Insert a patient, returning its IID.
    async fn insert_patient(&self, patient: &NewPatient) -> Result<i32>;

    /// Create the activity/appointment pair atomically, returning the CAID.
    async fn schedule_appointment(&self, req: &AppointmentRequest) -> Result<i32>;

    /// Medications out of stock or at/below reorder level.
    async fn low_stock(&self) -> Result<Vec<LowStockRow>>;

    /// Per-staff appointment counts with share of hospital total.
    async fn staff_share(&self) -> Result<Vec<StaffShare>>;

    async fn departments(&self) -> Result<Vec<Department>>;

    async fn staff(&self) -> Result<Vec<StaffMember>>;
}
