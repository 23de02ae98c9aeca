use std::sync::Arc;

use serde_json::json;

use shared_config::AppConfig;
use shared_models::auth::{Role, SessionContext};

pub struct TestConfig {
    pub clinic_api_url: String,
    pub reservation_excluded_statuses: Vec<String>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            clinic_api_url: "http://localhost:8000".to_string(),
            reservation_excluded_statuses: Vec::new(),
        }
    }
}

impl TestConfig {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            clinic_api_url: url.into(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            clinic_api_url: self.clinic_api_url.clone(),
            request_timeout_secs: 5,
            reservation_excluded_statuses: self.reservation_excluded_statuses.clone(),
            gateway_port: 0,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct TestSession;

impl TestSession {
    pub const TOKEN: &'static str = "test-access-token";

    pub fn patient(user_id: i64) -> SessionContext {
        SessionContext::new(Self::TOKEN, Role::Patient).with_user_id(user_id)
    }

    pub fn staff() -> SessionContext {
        SessionContext::new(Self::TOKEN, Role::Staff).with_user_id(1)
    }

    pub fn doctor() -> SessionContext {
        SessionContext::new(Self::TOKEN, Role::Doctor).with_user_id(7)
    }
}

pub struct MockClinicResponses;

impl MockClinicResponses {
    pub fn slot_response(id: i64, doctor_id: i64, status: &str, ticket_count: u32) -> serde_json::Value {
        json!({
            "id": id,
            "unique_id": format!("SLOT-{:04}", id),
            "doctor_id": doctor_id,
            "slot_date_time": "2025-06-02T09:00:00",
            "status": status,
            "ticket_count": ticket_count,
            "created_by": 1,
            "room_no": "R-101"
        })
    }

    pub fn reservation_response(id: i64, slot_id: i64, patient_id: i64) -> serde_json::Value {
        Self::reservation_with_status(id, slot_id, patient_id, "CONFIRM")
    }

    pub fn reservation_with_status(id: i64, slot_id: i64, patient_id: i64, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "reference_no": format!("RES-{:05}", id),
            "slot_id": slot_id,
            "patient_id": patient_id,
            "ticket_no": id,
            "status": status,
            "created_at": "2025-05-30T12:00:00Z"
        })
    }

    pub fn doctor_response(id: i64, first_name: &str, last_name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "email": format!("{}.{}@clinic.test", first_name.to_lowercase(), last_name.to_lowercase()),
            "first_name": first_name,
            "last_name": last_name,
            "phone": null,
            "specialist_in": "General Practice",
            "department": "OPD",
            "qualification": ["MBBS"]
        })
    }

    pub fn patient_response(id: i64, first_name: &str, last_name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "email": format!("{}.{}@clinic.test", first_name.to_lowercase(), last_name.to_lowercase()),
            "first_name": first_name,
            "last_name": last_name,
            "contact_no": "0771234567",
            "date_of_birth": "1990-04-12",
            "gender": "female",
            "is_active": true,
            "created_at": "2025-01-10T08:00:00",
            "updated_at": "2025-01-10T08:00:00"
        })
    }

    pub fn login_response(token: &str, role: &str) -> serde_json::Value {
        json!({
            "access_token": token,
            "token_type": "bearer",
            "role": role
        })
    }

    pub fn error_response(message: &str) -> serde_json::Value {
        json!({ "detail": message })
    }
}
