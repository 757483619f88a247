//! Success envelopes

use serde::{Deserialize, Serialize};

/// `{success: true, data: [...], count: n}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub count: usize,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// Reply to `POST /api/patients`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientCreated {
    pub success: bool,
    pub patient_id: i32,
    pub message: String,
}

impl PatientCreated {
    pub fn new(patient_id: i32) -> Self {
        Self {
            success: true,
            patient_id,
            message: "Patient added successfully".to_string(),
        }
    }
}

/// Reply to `POST /api/schedule_appt`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentScheduled {
    pub success: bool,
    pub appointment_id: i32,
    pub message: String,
}

impl AppointmentScheduled {
    pub fn new(appointment_id: i32) -> Self {
        Self {
            success: true,
            appointment_id,
            message: "Appointment scheduled successfully".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_matches_data() {
        let resp = ListResponse::new(vec![1, 2, 3]);
        assert!(resp.success);
        assert_eq!(resp.count, 3);

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": [1, 2, 3], "count": 3}));
    }
}
