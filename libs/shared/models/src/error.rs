use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClinicError {
    /// No usable credentials: missing or malformed token, missing or unknown role.
    #[error("Authentication error: {0}")]
    Unauthenticated(String),

    /// Role not permitted for the operation. Raised before any request.
    #[error("Authorization error: {0}")]
    Authorization(String),

    /// Network failure or non-2xx response from the clinic backend.
    #[error("Transport error{}: {message}", .status.map(|s| format!(" ({})", s)).unwrap_or_default())]
    Transport { status: Option<u16>, message: String },

    /// Success status but a body that does not parse as the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Booking attempted against a slot with no remaining tickets.
    #[error("Capacity error: {0}")]
    Capacity(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl ClinicError {
    pub fn kind(&self) -> &'static str {
        match self {
            ClinicError::Unauthenticated(_) => "unauthenticated",
            ClinicError::Authorization(_) => "authorization",
            ClinicError::Transport { .. } => "transport",
            ClinicError::MalformedResponse(_) => "malformed_response",
            ClinicError::Capacity(_) => "capacity",
            ClinicError::Validation(_) => "validation",
        }
    }

    pub fn transport(status: Option<u16>, message: impl Into<String>) -> Self {
        ClinicError::Transport {
            status,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ClinicError {
    fn from(err: reqwest::Error) -> Self {
        ClinicError::Transport {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ClinicError {
    fn into_response(self) -> Response {
        let status = match &self {
            ClinicError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ClinicError::Authorization(_) => StatusCode::FORBIDDEN,
            ClinicError::Transport { .. } => StatusCode::BAD_GATEWAY,
            ClinicError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            ClinicError::Capacity(_) => StatusCode::CONFLICT,
            ClinicError::Validation(_) => StatusCode::BAD_REQUEST,
        };

        tracing::error!("Error: {}: {}", status, self);

        let body = Json(json!({
            "error": self.to_string(),
            "kind": self.kind(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_message_includes_status_when_known() {
        let err = ClinicError::transport(Some(503), "Service Unavailable");
        assert_eq!(err.to_string(), "Transport error (503): Service Unavailable");

        let err = ClinicError::transport(None, "connection refused");
        assert_eq!(err.to_string(), "Transport error: connection refused");
    }

    #[test]
    fn error_kinds_map_to_distinct_statuses() {
        let cases = [
            (ClinicError::Unauthenticated("Missing role header".into()), StatusCode::UNAUTHORIZED),
            (ClinicError::Authorization("Missing access token".into()), StatusCode::FORBIDDEN),
            (ClinicError::transport(Some(500), "boom"), StatusCode::BAD_GATEWAY),
            (ClinicError::MalformedResponse("not json".into()), StatusCode::BAD_GATEWAY),
            (ClinicError::Capacity("sold out".into()), StatusCode::CONFLICT),
            (ClinicError::Validation("bad".into()), StatusCode::BAD_REQUEST),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn status_follows_variant_not_message_text() {
        let err = ClinicError::Unauthenticated("token rejected".into());
        assert_eq!(err.kind(), "unauthenticated");
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }
}
