use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shared_models::error::ClinicError;

/// Lifecycle status of a published slot. Transitions are owned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotStatus {
    Available,
    Booked,
    Cancelled,
    #[serde(alias = "CONFIRM")]
    Confirmed,
    /// Any label the backend sends that is not one of the above, including other casings.
    #[serde(other)]
    Unknown,
}

impl SlotStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, SlotStatus::Available)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub id: i64,
    pub unique_id: String,
    pub doctor_id: i64,
    #[serde(with = "shared_models::time")]
    pub slot_date_time: DateTime<Utc>,
    pub status: SlotStatus,
    pub ticket_count: u32,
    #[serde(default)]
    pub created_by: Option<i64>,
    pub room_no: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSlotRequest {
    pub doctor_id: i64,
    #[serde(with = "shared_models::time")]
    pub slot_date_time: DateTime<Utc>,
    #[serde(default = "default_new_slot_status")]
    pub status: SlotStatus,
    pub ticket_count: u32,
    pub created_by: i64,
    pub room_no: String,
}

fn default_new_slot_status() -> SlotStatus {
    SlotStatus::Available
}

impl CreateSlotRequest {
    pub fn validate(&self) -> Result<(), ClinicError> {
        if self.ticket_count == 0 {
            return Err(ClinicError::Validation("Ticket count must be at least 1".to_string()));
        }
        if self.room_no.trim().is_empty() {
            return Err(ClinicError::Validation("Room number is required".to_string()));
        }
        if self.status == SlotStatus::Unknown {
            return Err(ClinicError::Validation("Slot status is not recognised".to_string()));
        }
        Ok(())
    }
}
