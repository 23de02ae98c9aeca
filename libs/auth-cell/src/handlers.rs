use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    Json,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::auth::SessionContext;
use shared_models::error::ClinicError;

use crate::models::LoginRequest;
use crate::services::LoginService;

pub async fn login(
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Value>, ClinicError> {
    let session = LoginService::new(&config).login(&request).await?;

    Ok(Json(json!({
        "access_token": session.access_token,
        "role": session.role,
        "user_id": session.user_id
    })))
}

/// Echoes the session the gateway derived from the request headers.
pub async fn current_session(Extension(session): Extension<SessionContext>) -> Json<Value> {
    Json(json!({
        "role": session.role,
        "user_id": session.user_id
    }))
}
