//! Medication stock repository

use sqlx::{PgConnection, Row};

use crate::error::Result;
use crate::models::{LowStockRow, StockStatus};

/// Stock repository
pub struct StockRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> StockRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Medications with no stock row or quantity at/below reorder level.
    ///
    /// LEFT JOINs keep medications that have never been stocked; those come
    /// back with no hospital and zero quantities. Ordered by hospital name
    /// (unassigned last) then medication name.
    pub async fn low_stock(&mut self) -> Result<Vec<LowStockRow>> {
        let rows = sqlx::query(
            r#"
            SELECT
                h.name AS hospital_name,
                m.mid,
                m.name AS medication_name,
                COALESCE(s.qty, 0) AS current_quantity,
                COALESCE(s.reorder_level, 0) AS reorder_level,
                CASE
                    WHEN s.qty IS NULL THEN 'NO STOCK'
                    WHEN s.qty <= s.reorder_level THEN 'LOW STOCK'
                    ELSE 'IN STOCK'
                END AS stock_status
            FROM medication m
            LEFT JOIN stock s ON s.mid = m.mid
            LEFT JOIN hospital h ON h.hid = s.hid
            WHERE s.qty IS NULL OR s.qty <= s.reorder_level
            ORDER BY h.name, m.name
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        rows.into_iter()
            .map(|r| -> Result<LowStockRow> {
                let status: String = r.try_get("stock_status")?;
                Ok(LowStockRow {
                    hospital_name: r.try_get("hospital_name")?,
                    mid: r.try_get("mid")?,
                    medication_name: r.try_get("medication_name")?,
                    current_quantity: r.try_get("current_quantity")?,
                    reorder_level: r.try_get("reorder_level")?,
                    stock_status: status.parse::<StockStatus>()?,
                })
            })
            .collect()
    }
}
