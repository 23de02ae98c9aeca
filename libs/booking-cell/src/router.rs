use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::session_middleware;

use crate::handlers;

pub fn booking_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/doctors/{doctor_id}/availability", get(handlers::get_availability))
        .route("/doctors/{doctor_id}/slots/{slot_id}/book", post(handlers::book_slot))
        .layer(middleware::from_fn(session_middleware))
        .with_state(state)
}
