use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Patient record as listed by the backend's user directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub contact_no: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Short label staff pick from when booking on a patient's behalf, e.g. `Jane Doe - P007`.
    pub fn display_label(&self) -> String {
        format!("{} - P{:03}", self.full_name(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn optional_fields_default_when_absent() {
        let patient: Patient = serde_json::from_value(json!({
            "id": 7,
            "email": "jane@clinic.test",
            "first_name": "Jane",
            "last_name": "Doe"
        }))
        .unwrap();

        assert!(patient.is_active);
        assert_eq!(patient.date_of_birth, None);
        assert_eq!(patient.display_label(), "Jane Doe - P007");
    }

    #[test]
    fn date_of_birth_parses_from_iso_date() {
        let patient: Patient = serde_json::from_value(json!({
            "id": 1200,
            "email": "sam@clinic.test",
            "first_name": "Sam",
            "last_name": "Lee",
            "date_of_birth": "1990-04-12",
            "is_active": false
        }))
        .unwrap();

        assert_eq!(patient.date_of_birth, NaiveDate::from_ymd_opt(1990, 4, 12));
        assert!(!patient.is_active);
        assert_eq!(patient.display_label(), "Sam Lee - P1200");
    }
}
