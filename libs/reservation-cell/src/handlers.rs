use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    Json,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::auth::SessionContext;
use shared_models::error::ClinicError;

use crate::services::ReservationService;

pub async fn list_reservations(
    State(state): State<Arc<AppConfig>>,
    Extension(session): Extension<SessionContext>,
) -> Result<Json<Value>, ClinicError> {
    let reservations = ReservationService::new(&state).list_reservations(&session).await?;

    Ok(Json(json!({
        "reservations": reservations,
        "total": reservations.len()
    })))
}

pub async fn slot_occupancy(
    State(state): State<Arc<AppConfig>>,
    Extension(session): Extension<SessionContext>,
) -> Result<Json<Value>, ClinicError> {
    let occupancy = ReservationService::new(&state).slot_occupancy(&session).await?;
    let fully_booked = occupancy.iter().filter(|o| o.remaining == 0).count();

    Ok(Json(json!({
        "slots": occupancy,
        "fully_booked": fully_booked
    })))
}
