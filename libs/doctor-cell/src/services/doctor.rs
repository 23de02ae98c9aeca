use std::sync::Arc;

use tracing::debug;

use shared_api_client::ClinicApiClient;
use shared_config::AppConfig;
use shared_models::auth::{Operation, SessionContext};
use shared_models::error::ClinicError;

use crate::models::Doctor;

pub struct DoctorService {
    client: Arc<ClinicApiClient>,
}

impl DoctorService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Arc::new(ClinicApiClient::new(config)),
        }
    }

    pub fn with_client(client: Arc<ClinicApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_doctors(&self, session: &SessionContext) -> Result<Vec<Doctor>, ClinicError> {
        session.authorize(Operation::ListDoctors)?;
        debug!("Fetching doctor directory");

        self.client.get("/users/doctors/", &session.access_token).await
    }

    pub async fn get_doctor(&self, session: &SessionContext, doctor_id: i64) -> Result<Doctor, ClinicError> {
        session.authorize(Operation::ListDoctors)?;
        debug!("Fetching doctor: {}", doctor_id);

        let path = format!("/users/doctors/{}", doctor_id);
        self.client.get(&path, &session.access_token).await
    }
}
