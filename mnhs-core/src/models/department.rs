//! Department lookup rows

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Department {
    #[serde(rename = "DEP_ID")]
    pub dep_id: i32,
    #[serde(rename = "Name")]
    pub name: String,
}
