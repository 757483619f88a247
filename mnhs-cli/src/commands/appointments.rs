//! schedule_appt command

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use mnhs_core::models::AppointmentRequest;
use mnhs_core::RecordStore;
use mnhs_server::http::response::AppointmentScheduled;

use super::OutputMode;
use crate::render;

#[derive(Parser, Debug)]
pub struct ScheduleArgs {
    /// Clinical activity id (also the appointment key)
    #[arg(long)]
    pub caid: i32,

    /// Patient id
    #[arg(long)]
    pub iid: i32,

    /// Staff id
    #[arg(long)]
    pub staff: i32,

    /// Department id
    #[arg(long)]
    pub dep: i32,

    /// Date (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,

    /// Time (HH:MM:SS)
    #[arg(long)]
    pub time: NaiveTime,

    /// Reason for the visit (default: General Consultation)
    #[arg(long)]
    pub reason: Option<String>,
}

impl From<ScheduleArgs> for AppointmentRequest {
    fn from(args: ScheduleArgs) -> Self {
        Self {
            caid: args.caid,
            iid: args.iid,
            staff_id: args.staff,
            dep_id: args.dep,
            date: args.date,
            time: args.time,
            reason: args.reason,
        }
    }
}

/// Create the activity and appointment in one transaction
pub async fn run_schedule_appt(
    store: &dyn RecordStore,
    args: ScheduleArgs,
    mode: OutputMode,
) -> Result<String> {
    let req = AppointmentRequest::from(args);
    let caid = store
        .schedule_appointment(&req)
        .await
        .with_context(|| format!("failed to schedule appointment {}", req.caid))?;

    match mode {
        OutputMode::Text => Ok(format!("Appointment {} scheduled", caid)),
        OutputMode::Json => render::json(&AppointmentScheduled::new(caid)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fake::FakeStore;
    use mnhs_core::models::DEFAULT_REASON;

    fn args(reason: Option<&str>) -> ScheduleArgs {
        ScheduleArgs {
            caid: 10,
            iid: 1,
            staff: 2,
            dep: 3,
            date: NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
            time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            reason: reason.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn maps_flags_to_request() {
        let store = FakeStore::default();
        let out = run_schedule_appt(&store, args(None), OutputMode::Text)
            .await
            .unwrap();
        assert_eq!(out, "Appointment 10 scheduled");

        let scheduled = store.scheduled.lock().unwrap();
        assert_eq!(scheduled[0].staff_id, 2);
        assert_eq!(scheduled[0].dep_id, 3);
        assert_eq!(scheduled[0].reason(), DEFAULT_REASON);
    }

    #[tokio::test]
    async fn json_reply_matches_http() {
        let store = FakeStore::default();
        let out = run_schedule_appt(&store, args(Some("Follow-up")), OutputMode::Json)
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["appointment_id"], 10);
        assert_eq!(value["message"], "Appointment scheduled successfully");
    }

    #[tokio::test]
    async fn failure_names_the_activity() {
        let store = FakeStore {
            fail: true,
            ..FakeStore::default()
        };
        let err = run_schedule_appt(&store, args(None), OutputMode::Text)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "failed to schedule appointment 10");
    }
}
