use std::sync::Arc;

use tracing::debug;

use shared_api_client::ClinicApiClient;
use shared_config::AppConfig;
use shared_models::auth::{Operation, SessionContext};
use shared_models::error::ClinicError;

use crate::models::Patient;

/// Patient directory lookups for staff booking on a patient's behalf.
pub struct PatientService {
    client: Arc<ClinicApiClient>,
}

impl PatientService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Arc::new(ClinicApiClient::new(config)),
        }
    }

    pub fn with_client(client: Arc<ClinicApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_patients(&self, session: &SessionContext) -> Result<Vec<Patient>, ClinicError> {
        session.authorize(Operation::ListPatients)?;
        debug!("Fetching patient directory");

        let patients: Vec<Patient> = self.client.get("/users/patients/", &session.access_token).await?;

        debug!("Fetched {} patients", patients.len());
        Ok(patients)
    }

    pub async fn get_patient(&self, session: &SessionContext, patient_id: i64) -> Result<Patient, ClinicError> {
        session.authorize(Operation::ListPatients)?;
        debug!("Fetching patient: {}", patient_id);

        let path = format!("/users/patients/{}", patient_id);
        self.client.get(&path, &session.access_token).await
    }
}
