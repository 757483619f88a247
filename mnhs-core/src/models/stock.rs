//! Medication stock report rows

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MnhsError;

/// Stock classification for one medication/hospital pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    /// No stock row exists for the medication
    #[serde(rename = "NO STOCK")]
    NoStock,
    /// Quantity at or below the reorder level
    #[serde(rename = "LOW STOCK")]
    LowStock,
    #[serde(rename = "IN STOCK")]
    InStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoStock => "NO STOCK",
            Self::LowStock => "LOW STOCK",
            Self::InStock => "IN STOCK",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockStatus {
    type Err = MnhsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NO STOCK" => Ok(Self::NoStock),
            "LOW STOCK" => Ok(Self::LowStock),
            "IN STOCK" => Ok(Self::InStock),
            other => Err(MnhsError::decode("stock_status", other)),
        }
    }
}

/// One line of the low-stock report.
///
/// `hospital_name` is `None` for medications with no stock row anywhere;
/// quantity and reorder level read as 0 in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowStockRow {
    #[serde(rename = "HospitalName")]
    pub hospital_name: Option<String>,
    #[serde(rename = "MID")]
    pub mid: i32,
    #[serde(rename = "MedicationName")]
    pub medication_name: String,
    #[serde(rename = "CurrentQuantity")]
    pub current_quantity: i32,
    #[serde(rename = "ReorderLevel")]
    pub reorder_level: i32,
    #[serde(rename = "StockStatus")]
    pub stock_status: StockStatus,
}
