//! Report commands - low_stock, staff_share

use anyhow::{Context, Result};
use mnhs_core::RecordStore;
use mnhs_server::ListResponse;

use super::OutputMode;
use crate::render;

/// Medications with no stock or at/below reorder level, by hospital
pub async fn run_low_stock(store: &dyn RecordStore, mode: OutputMode) -> Result<String> {
    let rows = store
        .low_stock()
        .await
        .context("failed to load low stock report")?;

    match mode {
        OutputMode::Text => Ok(render::low_stock(&rows)),
        OutputMode::Json => render::json(&ListResponse::new(rows)),
    }
}

/// Appointment share per staff member, by hospital
pub async fn run_staff_share(store: &dyn RecordStore, mode: OutputMode) -> Result<String> {
    let rows = store
        .staff_share()
        .await
        .context("failed to load staff share report")?;

    match mode {
        OutputMode::Text => Ok(render::staff_share(&rows)),
        OutputMode::Json => render::json(&ListResponse::new(rows)),
    }
}
