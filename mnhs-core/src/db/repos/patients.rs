//! Patient repository
//!
//! - list: ordered by surname (text after the last space), then full name
//! - insert: single INSERT inside a transaction

use sqlx::{Connection, PgConnection};

use super::rollback;
use crate::error::{MnhsError, Result};
use crate::models::{NewPatient, PatientSummary};

/// Patient repository
pub struct PatientRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PatientRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// List at most `limit` patients, sorted by surname then full name.
    ///
    /// The surname is everything after the last space; a single-word name
    /// sorts as its own surname.
    pub async fn list_by_surname(&mut self, limit: u32) -> Result<Vec<PatientSummary>> {
        let rows: Vec<PatientSummary> = sqlx::query_as(
            r#"
            SELECT iid, full_name
            FROM patient
            ORDER BY regexp_replace(full_name, '^.* ', ''), full_name
            LIMIT $1
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(rows)
    }

    /// Insert one patient, returning its id.
    pub async fn insert(&mut self, patient: &NewPatient) -> Result<i32> {
        let mut tx = self.conn.begin().await?;

        let outcome = sqlx::query(
            r#"
            INSERT INTO patient (iid, cin, full_name, birth, sex, blood_group, phone)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(patient.iid)
        .bind(&patient.cin)
        .bind(&patient.full_name)
        .bind(patient.birth)
        .bind(&patient.sex)
        .bind(&patient.blood_group)
        .bind(&patient.phone)
        .execute(&mut *tx)
        .await;

        match outcome {
            Ok(_) => {
                tx.commit().await?;
                Ok(patient.iid)
            }
            Err(e) => {
                let err = MnhsError::from(e);
                rollback(tx, &err).await;
                Err(err)
            }
        }
    }
}
