use std::sync::Arc;

use axum::{
    Router,
    routing::get,
    Json,
};
use serde_json::json;

use auth_cell::router::auth_routes;
use booking_cell::router::booking_routes;
use doctor_cell::router::doctor_routes;
use patient_cell::router::patient_routes;
use reservation_cell::router::reservation_routes;
use shared_config::AppConfig;
use slot_cell::router::slot_routes;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic booking gateway is running!" }))
        .route("/health", get(|| async { Json(json!({ "status": "ok" })) }))
        .nest("/auth", auth_routes(state.clone()))
        .nest("/doctors", doctor_routes(state.clone()))
        .nest("/patients", patient_routes(state.clone()))
        .nest("/slots", slot_routes(state.clone()))
        .nest("/reservations", reservation_routes(state.clone()))
        .nest("/booking", booking_routes(state))
}
