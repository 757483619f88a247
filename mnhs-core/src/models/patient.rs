//! Patient rows

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Number of patients listed when the caller gives no limit
pub const DEFAULT_PATIENT_LIMIT: u32 = 20;

/// One line of the patient listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct PatientSummary {
    #[serde(rename = "IID")]
    pub iid: i32,
    #[serde(rename = "FullName")]
    pub full_name: String,
}

/// Fields for a new patient row.
///
/// Only the key and name are required here; everything else is passed
/// through and the schema decides what may be null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPatient {
    pub iid: i32,
    #[serde(default)]
    pub cin: Option<String>,
    pub full_name: String,
    #[serde(default)]
    pub birth: Option<NaiveDate>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_uses_column_names() {
        let row = PatientSummary {
            iid: 1,
            full_name: "Ana Cruz".into(),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json, serde_json::json!({"IID": 1, "FullName": "Ana Cruz"}));
    }

    #[test]
    fn new_patient_optional_fields() {
        let p: NewPatient =
            serde_json::from_str(r#"{"iid": 7, "full_name": "Omar Idrissi"}"#).unwrap();
        assert_eq!(p.iid, 7);
        assert!(p.cin.is_none());
        assert!(p.birth.is_none());

        let p: NewPatient = serde_json::from_str(
            r#"{"iid": 8, "cin": "AB123", "full_name": "Sara Alami", "birth": "1990-04-12",
                "sex": "F", "blood_group": "O+", "phone": "0600000000"}"#,
        )
        .unwrap();
        assert_eq!(p.birth, NaiveDate::from_ymd_opt(1990, 4, 12));
        assert_eq!(p.blood_group.as_deref(), Some("O+"));
    }

    #[test]
    fn new_patient_requires_name() {
        let err = serde_json::from_str::<NewPatient>(r#"{"iid": 7}"#).unwrap_err();
        assert!(err.to_string().contains("full_name"));
    }
}
