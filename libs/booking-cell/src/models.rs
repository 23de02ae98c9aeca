use serde::{Deserialize, Serialize};

use reservation_cell::models::Reservation;
use shared_models::error::ClinicError;
use slot_cell::models::Slot;

/// A published slot with its derived remaining capacity. Recomputed on every fetch and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableSlot {
    #[serde(flatten)]
    pub slot: Slot,
    pub remaining_tickets: u32,
}

impl AvailableSlot {
    pub fn id(&self) -> i64 {
        self.slot.id
    }

    /// Whether the booking affordance for this slot is enabled.
    pub fn is_bookable(&self) -> bool {
        self.remaining_tickets > 0
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookSlotRequest {
    /// Required when staff book on a patient's behalf; patients book for themselves.
    pub patient_id: Option<i64>,
}

/// Result of a successful booking. The refresh is reported separately because a failed
/// re-fetch does not undo the reservation the backend already accepted.
#[derive(Debug)]
pub struct BookingOutcome {
    pub reservation: Reservation,
    pub availability: Result<Vec<AvailableSlot>, ClinicError>,
}
