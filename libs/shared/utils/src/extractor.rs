use axum::{
    body::Body,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};

use shared_models::auth::{Role, SessionContext};
use shared_models::error::ClinicError;

pub const ROLE_HEADER: &str = "x-clinic-role";
pub const USER_ID_HEADER: &str = "x-clinic-user-id";

/// Builds the caller's [`SessionContext`] from request headers and stores it in the request
/// extensions. Role checks for the individual operation happen later in the services.
pub async fn session_middleware(mut request: Request<Body>, next: Next) -> Result<Response, ClinicError> {
    let session = session_from_headers(request.headers())?;
    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}

pub fn session_from_headers(headers: &HeaderMap) -> Result<SessionContext, ClinicError> {
    let auth_value = headers
        .get("Authorization")
        .ok_or_else(|| ClinicError::Unauthenticated("Missing access token".to_string()))?
        .to_str()
        .map_err(|_| ClinicError::Unauthenticated("Invalid authorization header format".to_string()))?;

    let token = auth_value
        .strip_prefix("Bearer ")
        .ok_or_else(|| ClinicError::Unauthenticated("Invalid authorization header format".to_string()))?
        .trim();

    if token.is_empty() {
        return Err(ClinicError::Unauthenticated("Missing access token".to_string()));
    }

    let raw_role = headers
        .get(ROLE_HEADER)
        .ok_or_else(|| ClinicError::Unauthenticated("Missing role header".to_string()))?
        .to_str()
        .map_err(|_| ClinicError::Unauthenticated("Invalid role header".to_string()))?;
    let role: Role = raw_role
        .parse()
        .map_err(|_| ClinicError::Unauthenticated(format!("Unknown role: {}", raw_role.trim())))?;

    let user_id = match headers.get(USER_ID_HEADER) {
        Some(value) => Some(
            value
                .to_str()
                .ok()
                .and_then(|raw| raw.trim().parse::<i64>().ok())
                .ok_or_else(|| ClinicError::Validation("User id header must be an integer".to_string()))?,
        ),
        None => None,
    };

    Ok(SessionContext {
        access_token: token.to_string(),
        role,
        user_id,
    })
}
