use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::auth::SessionContext;
use shared_models::error::ClinicError;

use crate::models::CreateSlotRequest;
use crate::services::SlotService;

pub async fn list_slots(
    State(state): State<Arc<AppConfig>>,
    Extension(session): Extension<SessionContext>,
) -> Result<Json<Value>, ClinicError> {
    let slots = SlotService::new(&state).list_all_slots(&session).await?;

    Ok(Json(json!({
        "slots": slots,
        "total": slots.len()
    })))
}

pub async fn list_doctor_slots(
    State(state): State<Arc<AppConfig>>,
    Extension(session): Extension<SessionContext>,
    Path(doctor_id): Path<i64>,
) -> Result<Json<Value>, ClinicError> {
    let slots = SlotService::new(&state).list_doctor_slots(&session, doctor_id).await?;

    Ok(Json(json!({
        "doctor_id": doctor_id,
        "slots": slots,
        "total": slots.len()
    })))
}

pub async fn create_slot(
    State(state): State<Arc<AppConfig>>,
    Extension(session): Extension<SessionContext>,
    Json(request): Json<CreateSlotRequest>,
) -> Result<(StatusCode, Json<Value>), ClinicError> {
    let slot = SlotService::new(&state).create_slot(&session, request).await?;

    Ok((StatusCode::CREATED, Json(json!(slot))))
}
