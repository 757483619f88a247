//! Department repository

use sqlx::PgConnection;

use crate::error::Result;
use crate::models::Department;

pub struct DepartmentRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> DepartmentRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// All departments, ordered by name.
    pub async fn list(&mut self) -> Result<Vec<Department>> {
        let rows: Vec<Department> =
            sqlx::query_as("SELECT dep_id, name FROM department ORDER BY name")
                .fetch_all(&mut *self.conn)
                .await?;
        Ok(rows)
    }
}
