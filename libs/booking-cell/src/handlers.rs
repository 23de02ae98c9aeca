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

use crate::models::{AvailableSlot, BookSlotRequest};
use crate::services::{bookable_slots, AvailabilityReconciler};

fn availability_body(doctor_id: i64, slots: &[AvailableSlot]) -> Value {
    let bookable: Vec<i64> = bookable_slots(slots).map(AvailableSlot::id).collect();

    json!({
        "doctor_id": doctor_id,
        "slots": slots,
        "bookable_slot_ids": bookable,
        "total": slots.len()
    })
}

pub async fn get_availability(
    State(state): State<Arc<AppConfig>>,
    Extension(session): Extension<SessionContext>,
    Path(doctor_id): Path<i64>,
) -> Result<Json<Value>, ClinicError> {
    let reconciler = AvailabilityReconciler::new(&state);
    let slots = reconciler.load_availability(&session, doctor_id).await?;

    Ok(Json(availability_body(doctor_id, &slots)))
}

pub async fn book_slot(
    State(state): State<Arc<AppConfig>>,
    Extension(session): Extension<SessionContext>,
    Path((doctor_id, slot_id)): Path<(i64, i64)>,
    request: Option<Json<BookSlotRequest>>,
) -> Result<(StatusCode, Json<Value>), ClinicError> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let reconciler = AvailabilityReconciler::new(&state);

    let current = reconciler.load_availability(&session, doctor_id).await?;
    let slot = current
        .iter()
        .find(|s| s.id() == slot_id)
        .ok_or_else(|| ClinicError::Validation(format!("Slot {} is not open for booking", slot_id)))?;

    let outcome = reconciler.attempt_booking(&session, slot, request.patient_id).await?;

    let body = match outcome.availability {
        Ok(slots) => json!({
            "reservation": outcome.reservation,
            "availability": availability_body(doctor_id, &slots)
        }),
        Err(e) => json!({
            "reservation": outcome.reservation,
            "availability": null,
            "refresh_error": e.to_string()
        }),
    };

    Ok((StatusCode::CREATED, Json(body)))
}
