use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shared_config::AppConfig;

/// Status every client-created reservation is sent with.
pub const CONFIRMED_RESERVATION_STATUS: &str = "CONFIRM";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub reference_no: String,
    pub slot_id: i64,
    pub patient_id: i64,
    pub ticket_no: i64,
    pub status: String,
    #[serde(with = "shared_models::time")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    pub slot_id: i64,
    pub patient_id: i64,
    pub status: String,
}

impl CreateReservationRequest {
    pub fn confirmed(slot_id: i64, patient_id: i64) -> Self {
        Self {
            slot_id,
            patient_id,
            status: CONFIRMED_RESERVATION_STATUS.to_string(),
        }
    }
}

/// Which reservation rows count against a slot's capacity.
///
/// `CountAll` counts every row regardless of its own status, so a cancelled reservation still
/// occupies a ticket in the client's view. `ExcludeStatuses` drops rows whose status matches one
/// of the labels (ASCII case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReservationCountPolicy {
    #[default]
    CountAll,
    ExcludeStatuses(Vec<String>),
}

impl ReservationCountPolicy {
    pub fn from_config(config: &AppConfig) -> Self {
        if config.reservation_excluded_statuses.is_empty() {
            ReservationCountPolicy::CountAll
        } else {
            ReservationCountPolicy::ExcludeStatuses(config.reservation_excluded_statuses.clone())
        }
    }

    pub fn counts(&self, reservation: &Reservation) -> bool {
        match self {
            ReservationCountPolicy::CountAll => true,
            ReservationCountPolicy::ExcludeStatuses(excluded) => !excluded
                .iter()
                .any(|status| status.eq_ignore_ascii_case(reservation.status.trim())),
        }
    }

    /// Counted reservations per slot id.
    pub fn tally(&self, reservations: &[Reservation]) -> HashMap<i64, u32> {
        let mut counts = HashMap::new();
        for reservation in reservations.iter().filter(|r| self.counts(r)) {
            *counts.entry(reservation.slot_id).or_insert(0u32) += 1;
        }
        counts
    }
}

/// Ticket usage of one slot, as shown on the staff overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotOccupancy {
    pub slot_id: i64,
    pub unique_id: String,
    pub doctor_id: i64,
    pub ticket_count: u32,
    pub reserved: u32,
    pub remaining: u32,
}
