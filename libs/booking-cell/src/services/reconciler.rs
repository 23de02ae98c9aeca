use std::sync::Arc;

use tracing::{debug, info, warn};

use reservation_cell::models::{CreateReservationRequest, ReservationCountPolicy};
use reservation_cell::services::ReservationService;
use shared_api_client::ClinicApiClient;
use shared_config::AppConfig;
use shared_models::auth::{Operation, Role, SessionContext};
use shared_models::error::ClinicError;
use slot_cell::services::SlotService;

use crate::models::{AvailableSlot, BookingOutcome};
use crate::services::availability::compute_availability;

/// Produces a doctor's bookable slots with remaining capacity and books against them.
///
/// Capacity is always recomputed from a fresh pair of fetches. A successful booking is never
/// applied as a local decrement: the backend is the only authority on capacity and other
/// clients' bookings are invisible until the next fetch.
pub struct AvailabilityReconciler {
    slot_service: SlotService,
    reservation_service: ReservationService,
    policy: ReservationCountPolicy,
}

impl AvailabilityReconciler {
    pub fn new(config: &AppConfig) -> Self {
        let client = Arc::new(ClinicApiClient::new(config));
        Self::with_client(client, ReservationCountPolicy::from_config(config))
    }

    pub fn with_client(client: Arc<ClinicApiClient>, policy: ReservationCountPolicy) -> Self {
        Self {
            slot_service: SlotService::with_client(Arc::clone(&client)),
            reservation_service: ReservationService::with_client(client, policy.clone()),
            policy,
        }
    }

    /// Fetches the doctor's slots and the reservation list concurrently and derives
    /// availability once both have arrived. Either failure fails the whole load.
    pub async fn load_availability(
        &self,
        session: &SessionContext,
        doctor_id: i64,
    ) -> Result<Vec<AvailableSlot>, ClinicError> {
        session.authorize(Operation::ViewAvailability)?;
        debug!("Loading availability for doctor {}", doctor_id);

        let (slots, reservations) = tokio::try_join!(
            self.slot_service.fetch_doctor_slots(session, doctor_id),
            self.reservation_service.fetch_reservations(session),
        )?;

        let available = compute_availability(&slots, &reservations, &self.policy);

        debug!(
            "Doctor {}: {} of {} slots open, {} bookable",
            doctor_id,
            available.len(),
            slots.len(),
            available.iter().filter(|s| s.is_bookable()).count()
        );

        Ok(available)
    }

    /// Books one ticket of `slot`.
    ///
    /// Patients book for themselves; staff must name the patient. The role and capacity gates
    /// run before any request is built. On success the availability is reloaded from the
    /// backend; on failure nothing local changes.
    pub async fn attempt_booking(
        &self,
        session: &SessionContext,
        slot: &AvailableSlot,
        patient_id: Option<i64>,
    ) -> Result<BookingOutcome, ClinicError> {
        if let Err(e) = session.authorize(Operation::BookSlot) {
            warn!("Booking rejected for role {}: {}", session.role, e);
            return Err(e);
        }

        if !slot.is_bookable() {
            warn!("Booking rejected: slot {} has no remaining tickets", slot.id());
            return Err(ClinicError::Capacity(format!(
                "Slot {} has no remaining tickets",
                slot.slot.unique_id
            )));
        }

        let patient_id = resolve_patient(session, patient_id)?;
        let request = CreateReservationRequest::confirmed(slot.id(), patient_id);

        let reservation = self.reservation_service.create_reservation(session, &request).await?;
        info!(
            "Booked slot {} for patient {} (ticket {})",
            slot.id(),
            patient_id,
            reservation.ticket_no
        );

        let availability = self.load_availability(session, slot.slot.doctor_id).await;
        if let Err(e) = &availability {
            warn!("Booking succeeded but availability refresh failed: {}", e);
        }

        Ok(BookingOutcome {
            reservation,
            availability,
        })
    }
}

fn resolve_patient(session: &SessionContext, requested: Option<i64>) -> Result<i64, ClinicError> {
    match session.role {
        Role::Patient => match (session.user_id, requested) {
            (Some(own), Some(other)) if own != other => Err(ClinicError::Authorization(
                "Patients can only book appointments for themselves".to_string(),
            )),
            (Some(own), _) => Ok(own),
            (None, Some(requested)) => Ok(requested),
            (None, None) => Err(ClinicError::Validation("Patient id is unknown for this session".to_string())),
        },
        Role::Staff => requested.ok_or_else(|| ClinicError::Validation("Please select a patient".to_string())),
        Role::Doctor => Err(ClinicError::Authorization("Doctors cannot book appointments".to_string())),
    }
}
