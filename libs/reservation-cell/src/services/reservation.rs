use std::sync::Arc;

use tracing::{debug, info};

use shared_api_client::ClinicApiClient;
use shared_config::AppConfig;
use shared_models::auth::{Operation, SessionContext};
use shared_models::error::ClinicError;
use slot_cell::services::SlotService;

use crate::models::{CreateReservationRequest, Reservation, ReservationCountPolicy, SlotOccupancy};

pub struct ReservationService {
    client: Arc<ClinicApiClient>,
    slot_service: SlotService,
    policy: ReservationCountPolicy,
}

impl ReservationService {
    pub fn new(config: &AppConfig) -> Self {
        let client = Arc::new(ClinicApiClient::new(config));
        Self::with_client(client, ReservationCountPolicy::from_config(config))
    }

    pub fn with_client(client: Arc<ClinicApiClient>, policy: ReservationCountPolicy) -> Self {
        Self {
            slot_service: SlotService::with_client(Arc::clone(&client)),
            client,
            policy,
        }
    }

    pub async fn list_reservations(&self, session: &SessionContext) -> Result<Vec<Reservation>, ClinicError> {
        session.authorize(Operation::ListReservations)?;
        self.fetch_reservations(session).await
    }

    /// The reservation listing without the staff gate; the caller is responsible for having
    /// authorized the operation it serves.
    pub async fn fetch_reservations(&self, session: &SessionContext) -> Result<Vec<Reservation>, ClinicError> {
        debug!("Fetching all reservations");

        let reservations: Vec<Reservation> = self.client.get("/reservations", &session.access_token).await?;

        debug!("Fetched {} reservations", reservations.len());
        Ok(reservations)
    }

    /// Issues the create request. Role and capacity gating belong to the booking workflow.
    pub async fn create_reservation(
        &self,
        session: &SessionContext,
        request: &CreateReservationRequest,
    ) -> Result<Reservation, ClinicError> {
        debug!("Creating reservation for patient {} on slot {}", request.patient_id, request.slot_id);

        let reservation: Reservation = self
            .client
            .post_json("/reservations", &session.access_token, request)
            .await?;

        info!(
            "Reservation {} created: slot {} ticket {}",
            reservation.reference_no, reservation.slot_id, reservation.ticket_no
        );
        Ok(reservation)
    }

    /// Per-slot ticket usage across every slot, for the staff overview.
    pub async fn slot_occupancy(&self, session: &SessionContext) -> Result<Vec<SlotOccupancy>, ClinicError> {
        session.authorize(Operation::ListReservations)?;

        let (slots, reservations) = tokio::try_join!(
            self.slot_service.list_all_slots(session),
            self.fetch_reservations(session),
        )?;

        let tally = self.policy.tally(&reservations);

        Ok(slots
            .into_iter()
            .map(|slot| {
                let reserved = tally.get(&slot.id).copied().unwrap_or(0);
                SlotOccupancy {
                    slot_id: slot.id,
                    unique_id: slot.unique_id,
                    doctor_id: slot.doctor_id,
                    ticket_count: slot.ticket_count,
                    reserved,
                    remaining: slot.ticket_count.saturating_sub(reserved),
                }
            })
            .collect())
    }
}
