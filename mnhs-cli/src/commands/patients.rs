//! Patient commands - list_patients, add_patient

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use mnhs_core::models::{NewPatient, DEFAULT_PATIENT_LIMIT};
use mnhs_core::RecordStore;
use mnhs_server::http::response::PatientCreated;
use mnhs_server::ListResponse;

use super::OutputMode;
use crate::render;

#[derive(Parser, Debug)]
pub struct ListPatientsArgs {
    /// Number of patients to list
    #[arg(long, default_value_t = DEFAULT_PATIENT_LIMIT)]
    pub limit: u32,
}

#[derive(Parser, Debug)]
pub struct AddPatientArgs {
    /// Patient id
    #[arg(long)]
    pub iid: i32,

    /// National identity number
    #[arg(long)]
    pub cin: Option<String>,

    /// Full name, surname last
    #[arg(long)]
    pub full_name: String,

    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    pub birth: Option<NaiveDate>,

    #[arg(long)]
    pub sex: Option<String>,

    #[arg(long)]
    pub blood_group: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,
}

impl From<AddPatientArgs> for NewPatient {
    fn from(args: AddPatientArgs) -> Self {
        Self {
            iid: args.iid,
            cin: args.cin,
            full_name: args.full_name,
            birth: args.birth,
            sex: args.sex,
            blood_group: args.blood_group,
            phone: args.phone,
        }
    }
}

/// List patients ordered by surname
pub async fn run_list_patients(
    store: &dyn RecordStore,
    args: ListPatientsArgs,
    mode: OutputMode,
) -> Result<String> {
    let rows = store
        .list_patients(args.limit)
        .await
        .context("failed to list patients")?;

    match mode {
        OutputMode::Text => Ok(render::patients(&rows)),
        OutputMode::Json => render::json(&ListResponse::new(rows)),
    }
}

/// Insert one patient
pub async fn run_add_patient(
    store: &dyn RecordStore,
    args: AddPatientArgs,
    mode: OutputMode,
) -> Result<String> {
    let patient = NewPatient::from(args);
    let iid = store
        .insert_patient(&patient)
        .await
        .context("failed to add patient")?;

    match mode {
        OutputMode::Text => Ok(format!("Patient {} added", iid)),
        OutputMode::Json => render::json(&PatientCreated::new(iid)),
    }
}
