//! Appointment repository
//!
//! Scheduling writes a `clinical_activity` row and an `appointment` row
//! with the same CAID. Both commit together or neither does.

use sqlx::{Connection, PgConnection};

use super::rollback;
use crate::error::Result;
use crate::models::{AppointmentRecord, AppointmentRequest, STATUS_SCHEDULED};

/// Appointment repository
pub struct AppointmentRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> AppointmentRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Schedule an appointment, returning the CAID used.
    pub async fn schedule(&mut self, req: &AppointmentRequest) -> Result<i32> {
        let mut tx = self.conn.begin().await?;

        match insert_pair(&mut tx, req).await {
            Ok(()) => {
                tx.commit().await?;
                Ok(req.caid)
            }
            Err(e) => {
                rollback(tx, &e).await;
                Err(e)
            }
        }
    }

    /// Fetch a scheduled appointment joined with its activity.
    pub async fn find(&mut self, caid: i32) -> Result<Option<AppointmentRecord>> {
        let record: Option<AppointmentRecord> = sqlx::query_as(
            r#"
            SELECT ca.caid, ca.iid, ca.staff_id, ca.dep_id, ca.date, ca.time,
                   a.reason, a.status
            FROM clinical_activity ca
            JOIN appointment a ON a.caid = ca.caid
            WHERE ca.caid = $1
            "#,
        )
        .bind(caid)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(record)
    }
}

async fn insert_pair(conn: &mut PgConnection, req: &AppointmentRequest) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO clinical_activity (caid, iid, staff_id, dep_id, date, time)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(req.caid)
    .bind(req.iid)
    .bind(req.staff_id)
    .bind(req.dep_id)
    .bind(req.date)
    .bind(req.time)
    .execute(&mut *conn)
    .await?;

    sqlx::query("INSERT INTO appointment (caid, reason, status) VALUES ($1, $2, $3)")
        .bind(req.caid)
        .bind(req.reason())
        .bind(STATUS_SCHEDULED)
        .execute(&mut *conn)
        .await?;

    Ok(())
}
