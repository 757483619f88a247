//! Lookup commands - departments, staff

use anyhow::{Context, Result};
use mnhs_core::RecordStore;
use mnhs_server::ListResponse;

use super::OutputMode;
use crate::render;

pub async fn run_departments(store: &dyn RecordStore, mode: OutputMode) -> Result<String> {
    let rows = store
        .departments()
        .await
        .context("failed to list departments")?;

    match mode {
        OutputMode::Text => Ok(render::departments(&rows)),
        OutputMode::Json => render::json(&ListResponse::new(rows)),
    }
}

pub async fn run_staff(store: &dyn RecordStore, mode: OutputMode) -> Result<String> {
    let rows = store.staff().await.context("failed to list staff")?;

    match mode {
        OutputMode::Text => Ok(render::staff(&rows)),
        OutputMode::Json => render::json(&ListResponse::new(rows)),
    }
}
