//! Staff repository

use sqlx::PgConnection;

use crate::error::Result;
use crate::models::{StaffMember, StaffShare};

/// Staff repository
pub struct StaffRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> StaffRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// All staff, ordered by name.
    pub async fn list(&mut self) -> Result<Vec<StaffMember>> {
        let rows: Vec<StaffMember> =
            sqlx::query_as("SELECT staff_id, full_name FROM staff ORDER BY full_name")
                .fetch_all(&mut *self.conn)
                .await?;
        Ok(rows)
    }

    /// Activity count per staff member and their share of the hospital total.
    ///
    /// The share uses a window SUM partitioned by hospital; NULLIF keeps a
    /// zero total from dividing, leaving the share NULL.
    pub async fn appointment_share(&mut self) -> Result<Vec<StaffShare>> {
        let rows: Vec<StaffShare> = sqlx::query_as(
            r#"
            SELECT
                s.staff_id,
                s.full_name,
                h.name AS hospital_name,
                COUNT(ca.caid) AS total_appointments,
                ROUND(
                    COUNT(ca.caid) * 100.0
                        / NULLIF(SUM(COUNT(ca.caid)) OVER (PARTITION BY h.hid), 0),
                    2
                )::float8 AS percentage_share
            FROM staff s
            JOIN clinical_activity ca ON ca.staff_id = s.staff_id
            JOIN department d ON d.dep_id = ca.dep_id
            JOIN hospital h ON h.hid = d.hid
            GROUP BY s.staff_id, s.full_name, h.name, h.hid
            ORDER BY h.name, total_appointments DESC, s.full_name
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(rows)
    }
}
