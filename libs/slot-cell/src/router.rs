use std::sync::Arc;

use axum::{
    middleware,
    routing::get,
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::session_middleware;

use crate::handlers;

pub fn slot_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(handlers::list_slots).post(handlers::create_slot))
        .route("/doctor/{doctor_id}", get(handlers::list_doctor_slots))
        .layer(middleware::from_fn(session_middleware))
        .with_state(state)
}
