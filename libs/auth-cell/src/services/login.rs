use std::sync::Arc;

use tracing::{debug, info, warn};

use shared_api_client::ClinicApiClient;
use shared_config::AppConfig;
use shared_models::auth::{LoginResponse, SessionContext};
use shared_models::error::ClinicError;

use crate::models::{LoginRequest, PasswordGrantForm};

pub struct LoginService {
    client: Arc<ClinicApiClient>,
}

impl LoginService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Arc::new(ClinicApiClient::new(config)),
        }
    }

    pub fn with_client(client: Arc<ClinicApiClient>) -> Self {
        Self { client }
    }

    /// Exchanges credentials for the session every later operation is authorized against.
    pub async fn login(&self, request: &LoginRequest) -> Result<SessionContext, ClinicError> {
        if request.email.trim().is_empty() || request.password.is_empty() {
            return Err(ClinicError::Validation("Email and password are required".to_string()));
        }

        debug!("Logging in {}", request.email);

        let form = PasswordGrantForm::new(request.email.trim(), &request.password);
        let response: LoginResponse = self.client.post_form("/auth/login", &form).await?;

        if let Some(expected) = request.expected_role {
            if response.role != expected {
                warn!("Login for {} returned role {} but {} was selected", request.email, response.role, expected);
                return Err(ClinicError::Authorization(format!(
                    "Account role '{}' does not match the selected role '{}'",
                    response.role, expected
                )));
            }
        }

        info!("Logged in {} as {}", request.email, response.role);
        Ok(SessionContext::from(response))
    }
}
