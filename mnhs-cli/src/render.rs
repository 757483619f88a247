//! Plain-text rendering for command output
//!
//! Reports are grouped by hospital: a blank line and a `Hospital:` header
//! each time the hospital changes, rows indented beneath it.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use mnhs_core::models::{
    Department, LowStockRow, PatientSummary, StaffMember, StaffShare, StockStatus,
};
use serde::Serialize;

/// Header used for stock rows with no hospital
const UNASSIGNED: &str = "Unassigned";

/// Serialize any response envelope as pretty JSON.
pub fn json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output")
}

pub fn patients(rows: &[PatientSummary]) -> String {
    if rows.is_empty() {
        return "No patients found".to_string();
    }
    rows.iter()
        .map(|p| format!("{} {}", p.iid, p.full_name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn departments(rows: &[Department]) -> String {
    rows.iter()
        .map(|d| format!("{} {}", d.dep_id, d.name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn staff(rows: &[StaffMember]) -> String {
    rows.iter()
        .map(|s| format!("{} {}", s.staff_id, s.full_name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn low_stock(rows: &[LowStockRow]) -> String {
    if rows.is_empty() {
        return "No low stock items found".to_string();
    }

    grouped(rows, |r| r.hospital_name.as_deref().unwrap_or(UNASSIGNED), |r| {
        match r.stock_status {
            StockStatus::NoStock => format!("{}: NO STOCK", r.medication_name),
            _ => format!(
                "{}: LOW STOCK ({} units)",
                r.medication_name, r.current_quantity
            ),
        }
    })
}

pub fn staff_share(rows: &[StaffShare]) -> String {
    if rows.is_empty() {
        return "No staff data found".to_string();
    }

    grouped(rows, |r| r.hospital_name.as_str(), |r| {
        let share = match r.percentage_share {
            Some(pct) => format!("{:.2}%", pct),
            None => "n/a".to_string(),
        };
        format!(
            "{}: {} appointments ({})",
            r.full_name, r.total_appointments, share
        )
    })
}

/// Rows arrive sorted by hospital; emit a header whenever it changes.
fn grouped<'a, T>(
    rows: &'a [T],
    hospital: impl Fn(&'a T) -> &'a str,
    line: impl Fn(&T) -> String,
) -> String {
    let mut out = String::new();
    let mut current: Option<&str> = None;

    for row in rows {
        let name = hospital(row);
        if current != Some(name) {
            current = Some(name);
            let _ = write!(out, "\n{}:\n", name);
        }
        let _ = writeln!(out, "  {}", line(row));
    }

    out.truncate(out.trim_end().len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock(hospital: Option<&str>, med: &str, qty: i32, status: StockStatus) -> LowStockRow {
        LowStockRow {
            hospital_name: hospital.map(str::to_string),
            mid: 1,
            medication_name: med.to_string(),
            current_quantity: qty,
            reorder_level: 10,
            stock_status: status,
        }
    }

    fn share(hospital: &str, name: &str, n: i64, pct: Option<f64>) -> StaffShare {
        StaffShare {
            staff_id: 1,
            full_name: name.to_string(),
            hospital_name: hospital.to_string(),
            total_appointments: n,
            percentage_share: pct,
        }
    }

    #[test]
    fn patient_lines() {
        let rows = vec![
            PatientSummary {
                iid: 3,
                full_name: "Bilal Amrani".into(),
            },
            PatientSummary {
                iid: 1,
                full_name: "Ana Cruz".into(),
            },
        ];
        assert_eq!(patients(&rows), "3 Bilal Amrani\n1 Ana Cruz");
        assert_eq!(patients(&[]), "No patients found");
    }

    #[test]
    fn low_stock_grouped_by_hospital() {
        let rows = vec![
            stock(Some("CHU Rabat"), "Ibuprofen", 3, StockStatus::LowStock),
            stock(Some("CHU Rabat"), "Insulin", 10, StockStatus::LowStock),
            stock(Some("Hopital Agadir"), "Morphine", 0, StockStatus::LowStock),
            stock(None, "Amoxicillin", 0, StockStatus::NoStock),
        ];

        let expected = "\nCHU Rabat:\n\
                        \x20 Ibuprofen: LOW STOCK (3 units)\n\
                        \x20 Insulin: LOW STOCK (10 units)\n\
                        \n\
                        Hopital Agadir:\n\
                        \x20 Morphine: LOW STOCK (0 units)\n\
                        \n\
                        Unassigned:\n\
                        \x20 Amoxicillin: NO STOCK";
        assert_eq!(low_stock(&rows), expected);
    }

    #[test]
    fn low_stock_empty() {
        assert_eq!(low_stock(&[]), "No low stock items found");
    }

    #[test]
    fn staff_share_formats_percentages() {
        let rows = vec![
            share("CHU Rabat", "Dr. Karim Bennani", 2, Some(66.67)),
            share("CHU Rabat", "Dr. Leila Fassi", 1, Some(33.33)),
            share("Hopital Agadir", "Dr. Omar Chraibi", 0, None),
        ];

        let text = staff_share(&rows);
        assert!(text.contains("CHU Rabat:\n  Dr. Karim Bennani: 2 appointments (66.67%)"));
        assert!(text.contains("  Dr. Leila Fassi: 1 appointments (33.33%)"));
        assert!(text.contains("Hopital Agadir:\n  Dr. Omar Chraibi: 0 appointments (n/a)"));
        assert_eq!(text.matches("CHU Rabat:").count(), 1);
    }

    #[test]
    fn staff_share_empty() {
        assert_eq!(staff_share(&[]), "No staff data found");
    }

    #[test]
    fn lookup_lines() {
        let deps = vec![Department {
            dep_id: 2,
            name: "Emergency".into(),
        }];
        assert_eq!(departments(&deps), "2 Emergency");

        let people = vec![StaffMember {
            staff_id: 5,
            full_name: "Dr. Hind Tazi".into(),
        }];
        assert_eq!(staff(&people), "5 Dr. Hind Tazi");
    }
}
