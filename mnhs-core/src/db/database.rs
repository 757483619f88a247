//! Postgres-backed [`RecordStore`]
//!
//! Every call opens its own connection from the stored options and closes
//! it before returning. Concurrent callers are isolated only by Postgres.

use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, PgConnection};

use super::repos::{AppointmentRepo, DepartmentRepo, PatientRepo, StaffRepo, StockRepo};
use crate::config::DbConfig;
use crate::error::{MnhsError, Result};
use crate::models::{
    AppointmentRecord, AppointmentRequest, Department, LowStockRow, NewPatient, PatientSummary,
    StaffMember, StaffShare,
};
use crate::store::RecordStore;

/// Connection factory for the records database
pub struct Database {
    options: PgConnectOptions,
    target: String,
}

impl Database {
    /// Prepare connect options. Does not touch the network.
    pub fn new(config: &DbConfig) -> Result<Self> {
        Ok(Self {
            options: config.connect_options()?,
            target: config.describe(),
        })
    }

    /// Use prepared connect options directly (e.g. with extra session settings).
    pub fn from_options(options: PgConnectOptions, target: impl Into<String>) -> Self {
        Self {
            options,
            target: target.into(),
        }
    }

    /// Open a fresh connection.
    pub async fn connect(&self) -> Result<PgConnection> {
        PgConnection::connect_with(&self.options)
            .await
            .map_err(|e| {
                tracing::error!(target_db = %self.target, error = %e, "database connection failed");
                MnhsError::connect(e)
            })
    }

    /// Look up a scheduled appointment by CAID.
    pub async fn find_appointment(&self, caid: i32) -> Result<Option<AppointmentRecord>> {
        let mut conn = self.connect().await?;
        let found = AppointmentRepo::new(&mut conn).find(caid).await;
        release(conn).await;
        found
    }
}

async fn release(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        tracing::debug!(error = %e, "error closing connection");
    }
}

#[async_trait]
impl RecordStore for Database {
    async fn list_patients(&self, limit: u32) -> Result<Vec<PatientSummary>> {
        let mut conn = self.connect().await?;
        let rows = PatientRepo::new(&mut conn).list_by_surname(limit).await;
        release(conn).await;

        let rows = rows?;
        tracing::debug!(limit, count = rows.len(), "listed patients");
        Ok(rows)
    }

    async fn insert_patient(&self, patient: &NewPatient) -> Result<i32> {
        let mut conn = self.connect().await?;
        let inserted = PatientRepo::new(&mut conn).insert(patient).await;
        release(conn).await;

        let iid = inserted?;
        tracing::info!(iid, "patient added");
        Ok(iid)
    }

    async fn schedule_appointment(&self, req: &AppointmentRequest) -> Result<i32> {
        let mut conn = self.connect().await?;
        let scheduled = AppointmentRepo::new(&mut conn).schedule(req).await;
        release(conn).await;

        let caid = scheduled?;
        tracing::info!(caid, iid = req.iid, staff_id = req.staff_id, "appointment scheduled");
        Ok(caid)
    }

    async fn low_stock(&self) -> Result<Vec<LowStockRow>> {
        let mut conn = self.connect().await?;
        let rows = StockRepo::new(&mut conn).low_stock().await;
        release(conn).await;

        let rows = rows?;
        tracing::debug!(count = rows.len(), "low stock report");
        Ok(rows)
    }

    async fn staff_share(&self) -> Result<Vec<StaffShare>> {
        let mut conn = self.connect().await?;
        let rows = StaffRepo::new(&mut conn).appointment_share().await;
        release(conn).await;

        let rows = rows?;
        tracing::debug!(count = rows.len(), "staff share report");
        Ok(rows)
    }

    async fn departments(&self) -> Result<Vec<Department>> {
        let mut conn = self.connect().await?;
        let rows = DepartmentRepo::new(&mut conn).list().await;
        release(conn).await;
        rows
    }

    async fn staff(&self) -> Result<Vec<StaffMember>> {
        let mut conn = self.connect().await?;
        let rows = StaffRepo::new(&mut conn).list().await;
        release(conn).await;
        rows
    }
}
