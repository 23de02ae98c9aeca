use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tracing::debug;

use reservation_cell::models::Reservation;
use shared_models::auth::SessionContext;
use shared_models::error::ClinicError;

use crate::models::AvailableSlot;
use crate::services::reconciler::AvailabilityReconciler;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Closed,
    Loading { doctor_id: i64 },
    Ready { doctor_id: i64, slots: Vec<AvailableSlot> },
    Failed { doctor_id: i64, message: String },
}

/// Identifies one opening of the view. Results carrying a stale ticket are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewTicket {
    epoch: u64,
    doctor_id: i64,
}

/// State of one open slot-availability view.
///
/// Every `open` and `close` advances the epoch, so a fetch that resolves after the view was
/// closed or reopened for another doctor cannot overwrite what is on screen.
#[derive(Debug)]
pub struct AvailabilityView {
    epoch: AtomicU64,
    state: RwLock<ViewState>,
}

impl Default for AvailabilityView {
    fn default() -> Self {
        Self::new()
    }
}

impl AvailabilityView {
    pub fn new() -> Self {
        Self {
            epoch: AtomicU64::new(0),
            state: RwLock::new(ViewState::Closed),
        }
    }

    pub async fn state(&self) -> ViewState {
        self.state.read().await.clone()
    }

    pub async fn open(&self, doctor_id: i64) -> ViewTicket {
        let mut state = self.state.write().await;
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        *state = ViewState::Loading { doctor_id };
        ViewTicket { epoch, doctor_id }
    }

    pub async fn close(&self) {
        let mut state = self.state.write().await;
        self.epoch.fetch_add(1, Ordering::SeqCst);
        *state = ViewState::Closed;
    }

    /// Stores a load result if `ticket` is still current. Returns whether it was applied.
    pub async fn apply(&self, ticket: ViewTicket, result: Result<Vec<AvailableSlot>, ClinicError>) -> bool {
        let mut state = self.state.write().await;
        if self.epoch.load(Ordering::SeqCst) != ticket.epoch {
            debug!("Discarding availability for doctor {}: view no longer current", ticket.doctor_id);
            return false;
        }

        *state = match result {
            Ok(slots) => ViewState::Ready {
                doctor_id: ticket.doctor_id,
                slots,
            },
            Err(e) => ViewState::Failed {
                doctor_id: ticket.doctor_id,
                message: e.to_string(),
            },
        };
        true
    }

    /// Opens the view for `doctor_id` and loads it. Returns whether the result was applied.
    pub async fn load(&self, reconciler: &AvailabilityReconciler, session: &SessionContext, doctor_id: i64) -> bool {
        let ticket = self.open(doctor_id).await;
        let result = reconciler.load_availability(session, doctor_id).await;
        self.apply(ticket, result).await
    }

    /// Books `slot_id` from the slots currently on screen.
    ///
    /// A failed booking leaves the displayed state untouched. After a successful booking the
    /// refreshed availability replaces it, unless the view was closed in the meantime.
    pub async fn book(
        &self,
        reconciler: &AvailabilityReconciler,
        session: &SessionContext,
        slot_id: i64,
        patient_id: Option<i64>,
    ) -> Result<Reservation, ClinicError> {
        let (ticket, slot) = {
            let state = self.state.read().await;
            let ViewState::Ready { doctor_id, slots } = &*state else {
                return Err(ClinicError::Validation("Slot view is not ready".to_string()));
            };
            let slot = slots
                .iter()
                .find(|s| s.id() == slot_id)
                .cloned()
                .ok_or_else(|| ClinicError::Validation(format!("Slot {} is not open for booking", slot_id)))?;
            let ticket = ViewTicket {
                epoch: self.epoch.load(Ordering::SeqCst),
                doctor_id: *doctor_id,
            };
            (ticket, slot)
        };

        let outcome = reconciler.attempt_booking(session, &slot, patient_id).await?;
        self.apply(ticket, outcome.availability).await;

        Ok(outcome.reservation)
    }
}
