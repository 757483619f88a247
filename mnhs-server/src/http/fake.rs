//! In-memory RecordStore for route tests

use std::sync::Mutex;

use async_trait::async_trait;
use mnhs_core::models::{
    AppointmentRequest, Department, LowStockRow, NewPatient, PatientSummary, StaffMember,
    StaffShare,
};
use mnhs_core::{MnhsError, RecordStore, Result};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Failure {
    Connection,
    Constraint,
}

#[derive(Default)]
pub(crate) struct FakeStore {
    pub patients: Vec<PatientSummary>,
    pub low_stock: Vec<LowStockRow>,
    pub shares: Vec<StaffShare>,
    pub departments: Vec<Department>,
    pub staff: Vec<StaffMember>,
    pub failure: Option<Failure>,
    pub limits_seen: Mutex<Vec<u32>>,
    pub inserted: Mutex<Vec<NewPatient>>,
    pub scheduled: Mutex<Vec<AppointmentRequest>>,
}

impl FakeStore {
    pub fn failing(failure: Failure) -> Self {
        Self {
            failure: Some(failure),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<()> {
        match self.failure {
            None => Ok(()),
            Some(Failure::Connection) => Err(MnhsError::connect(sqlx::Error::PoolTimedOut)),
            Some(Failure::Constraint) => Err(MnhsError::from(sqlx::Error::Protocol(
                "duplicate key value violates unique constraint".into(),
            ))),
        }
    }
}

#[async_trait]
impl RecordStore for FakeStore {
    async fn list_patients(&self, limit: u32) -> Result<Vec<PatientSummary>> {
        self.check()?;
        self.limits_seen.lock().unwrap().push(limit);
        Ok(self.patients.iter().take(limit as usize).cloned().collect())
    }

    async fn insert_patient(&self, patient: &NewPatient) -> Result<i32> {
        self.check()?;
        self.inserted.lock().unwrap().push(patient.clone());
        Ok(patient.iid)
    }

    async fn schedule_appointment(&self, req: &AppointmentRequest) -> Result<i32> {
        self.check()?;
        self.scheduled.lock().unwrap().push(req.clone());
        Ok(req.caid)
    }

    async fn low_stock(&self) -> Result<Vec<LowStockRow>> {
        self.check()?;
        Ok(self.low_stock.clone())
    }

    async fn staff_share(&self) -> Result<Vec<StaffShare>> {
        self.check()?;
        Ok(self.shares.clone())
    }

    async fn departments(&self) -> Result<Vec<Department>> {
        self.check()?;
        Ok(self.departments.clone())
    }

    async fn staff(&self) -> Result<Vec<StaffMember>> {
        self.check()?;
        Ok(self.staff.clone())
    }
}
