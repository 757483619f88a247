//! mnhs CLI - hospital records from the command line
//!
//! Runs the same queries the HTTP API exposes:
//! - Patient listing and insertion (`list_patients`, `add_patient`)
//! - Appointment scheduling (`schedule_appt`)
//! - Reports (`low_stock`, `staff_share`)
//! - Lookups (`departments`, `staff`)
//! - The HTTP server itself (`serve`)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mnhs_core::{Database, DbConfig};
use tracing::debug;

mod commands;
mod render;
mod tracing_setup;

use commands::OutputMode;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "mnhs",
    author,
    version,
    about = "MNHS hospital records: patients, appointments, stock and staff reports",
    long_about = "Query and update the MNHS records database. Connection settings come from \
                  MNHS_DB_HOST, MNHS_DB_PORT, MNHS_DB_NAME, MNHS_DB_USER, MNHS_DB_PASSWORD \
                  or DATABASE_URL (a .env file in the working directory is read first)."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Print the JSON envelope the HTTP API returns instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Database URL (overrides the MNHS_DB_* settings)
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List patients ordered by surname
    #[command(name = "list_patients", alias = "list-patients")]
    ListPatients(commands::patients::ListPatientsArgs),
    /// Add a patient
    #[command(name = "add_patient", alias = "add-patient")]
    AddPatient(commands::patients::AddPatientArgs),
    /// Schedule an appointment (activity + appointment in one transaction)
    #[command(name = "schedule_appt", alias = "schedule-appt")]
    ScheduleAppt(commands::appointments::ScheduleArgs),
    /// Medications out of stock or at/below reorder level, per hospital
    #[command(name = "low_stock", alias = "low-stock")]
    LowStock,
    /// Appointment share of each staff member within their hospital
    #[command(name = "staff_share", alias = "staff-share")]
    StaffShare,
    /// List departments
    Departments,
    /// List staff
    Staff,
    /// Run the HTTP API and browser page
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before parsing so clap sees DATABASE_URL from it
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    let config = DbConfig::from_env()
        .context("invalid database settings")?
        .with_url(cli.database_url);
    debug!(target_db = %config.describe(), "database settings resolved");
    let db = Database::new(&config).context("invalid database settings")?;

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };

    let output = match cli.command {
        Commands::ListPatients(args) => commands::run_list_patients(&db, args, mode).await?,
        Commands::AddPatient(args) => commands::run_add_patient(&db, args, mode).await?,
        Commands::ScheduleAppt(args) => commands::run_schedule_appt(&db, args, mode).await?,
        Commands::LowStock => commands::run_low_stock(&db, mode).await?,
        Commands::StaffShare => commands::run_staff_share(&db, mode).await?,
        Commands::Departments => commands::run_departments(&db, mode).await?,
        Commands::Staff => commands::run_staff(&db, mode).await?,
        Commands::Serve(args) => {
            commands::run_serve(db, args).await?;
            return Ok(());
        }
    };

    println!("{}", output);
    Ok(())
}
