use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::auth::SessionContext;
use shared_models::error::ClinicError;

use crate::services::PatientService;

pub async fn list_patients(
    State(state): State<Arc<AppConfig>>,
    Extension(session): Extension<SessionContext>,
) -> Result<Json<Value>, ClinicError> {
    let patients = PatientService::new(&state).list_patients(&session).await?;

    let options: Vec<Value> = patients
        .iter()
        .filter(|p| p.is_active)
        .map(|p| json!({ "id": p.id, "label": p.display_label() }))
        .collect();

    Ok(Json(json!({
        "patients": patients,
        "booking_options": options,
        "total": patients.len()
    })))
}

pub async fn get_patient(
    State(state): State<Arc<AppConfig>>,
    Extension(session): Extension<SessionContext>,
    Path(patient_id): Path<i64>,
) -> Result<Json<Value>, ClinicError> {
    let patient = PatientService::new(&state).get_patient(&session, patient_id).await?;

    Ok(Json(json!(patient)))
}
