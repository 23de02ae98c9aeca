use std::sync::Arc;

use tracing::{debug, info};

use shared_api_client::ClinicApiClient;
use shared_config::AppConfig;
use shared_models::auth::{Operation, SessionContext};
use shared_models::error::ClinicError;

use crate::models::{CreateSlotRequest, Slot};

pub struct SlotService {
    client: Arc<ClinicApiClient>,
}

impl SlotService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Arc::new(ClinicApiClient::new(config)),
        }
    }

    pub fn with_client(client: Arc<ClinicApiClient>) -> Self {
        Self { client }
    }

    /// Slots published for one doctor, in backend order.
    pub async fn list_doctor_slots(&self, session: &SessionContext, doctor_id: i64) -> Result<Vec<Slot>, ClinicError> {
        session.authorize(Operation::ViewSlots)?;
        self.fetch_doctor_slots(session, doctor_id).await
    }

    /// Same request as [`Self::list_doctor_slots`] without the role gate, for callers that
    /// already authorized a broader operation.
    pub async fn fetch_doctor_slots(&self, session: &SessionContext, doctor_id: i64) -> Result<Vec<Slot>, ClinicError> {
        debug!("Fetching slots for doctor: {}", doctor_id);

        let path = format!("/channeling/slots/{}", doctor_id);
        let slots: Vec<Slot> = self.client.get(&path, &session.access_token).await?;

        debug!("Fetched {} slots for doctor {}", slots.len(), doctor_id);
        Ok(slots)
    }

    pub async fn list_all_slots(&self, session: &SessionContext) -> Result<Vec<Slot>, ClinicError> {
        session.authorize(Operation::ViewSlots)?;
        debug!("Fetching all slots");

        self.client.get("/channeling/slots", &session.access_token).await
    }

    pub async fn create_slot(&self, session: &SessionContext, request: CreateSlotRequest) -> Result<Slot, ClinicError> {
        session.authorize(Operation::CreateSlot)?;
        request.validate()?;

        debug!("Creating slot for doctor {} in room {}", request.doctor_id, request.room_no);

        let slot: Slot = self
            .client
            .post_json("/channeling/slots", &session.access_token, &request)
            .await?;

        info!("Slot {} ({}) created for doctor {}", slot.id, slot.unique_id, slot.doctor_id);
        Ok(slot)
    }
}
