use std::sync::Arc;

use axum::{
    middleware,
    routing::get,
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::session_middleware;

use crate::handlers;

pub fn reservation_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(handlers::list_reservations))
        .route("/occupancy", get(handlers::slot_occupancy))
        .layer(middleware::from_fn(session_middleware))
        .with_state(state)
}
