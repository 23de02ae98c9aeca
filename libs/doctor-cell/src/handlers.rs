use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::auth::SessionContext;
use shared_models::error::ClinicError;

use crate::services::DoctorService;

pub async fn list_doctors(
    State(state): State<Arc<AppConfig>>,
    Extension(session): Extension<SessionContext>,
) -> Result<Json<Value>, ClinicError> {
    let doctors = DoctorService::new(&state).list_doctors(&session).await?;

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

pub async fn get_doctor(
    State(state): State<Arc<AppConfig>>,
    Extension(session): Extension<SessionContext>,
    Path(doctor_id): Path<i64>,
) -> Result<Json<Value>, ClinicError> {
    let doctor = DoctorService::new(&state).get_doctor(&session, doctor_id).await?;

    Ok(Json(json!(doctor)))
}
