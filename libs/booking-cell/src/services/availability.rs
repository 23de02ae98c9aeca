use reservation_cell::models::{Reservation, ReservationCountPolicy};
use slot_cell::models::Slot;

use crate::models::AvailableSlot;

/// Derives remaining capacity for every slot whose status is exactly `Available`.
///
/// Backend order is preserved. `remaining = max(0, ticket_count - counted reservations)`,
/// where `policy` decides which reservation rows count. Both inputs are read-only snapshots.
pub fn compute_availability(
    slots: &[Slot],
    reservations: &[Reservation],
    policy: &ReservationCountPolicy,
) -> Vec<AvailableSlot> {
    let booked = policy.tally(reservations);

    slots
        .iter()
        .filter(|slot| slot.status.is_available())
        .map(|slot| {
            let booked_count = booked.get(&slot.id).copied().unwrap_or(0);
            AvailableSlot {
                slot: slot.clone(),
                remaining_tickets: slot.ticket_count.saturating_sub(booked_count),
            }
        })
        .collect()
}

/// The subset of `available` whose booking affordance is enabled.
pub fn bookable_slots(available: &[AvailableSlot]) -> impl Iterator<Item = &AvailableSlot> {
    available.iter().filter(|slot| slot.is_bookable())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use slot_cell::models::SlotStatus;

    fn slot(id: i64, status: SlotStatus, ticket_count: u32) -> Slot {
        Slot {
            id,
            unique_id: format!("SLOT-{}", id),
            doctor_id: 3,
            slot_date_time: Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap(),
            status,
            ticket_count,
            created_by: Some(1),
            room_no: "R-1".to_string(),
        }
    }

    fn reservation(id: i64, slot_id: i64, status: &str) -> Reservation {
        Reservation {
            id,
            reference_no: format!("RES-{}", id),
            slot_id,
            patient_id: 100 + id,
            ticket_no: id,
            status: status.to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn full_slot_has_zero_remaining_and_is_not_bookable() {
        let slots = vec![slot(10, SlotStatus::Available, 2)];
        let reservations = vec![reservation(1, 10, "CONFIRM"), reservation(2, 10, "CONFIRM")];

        let available = compute_availability(&slots, &reservations, &ReservationCountPolicy::CountAll);

        assert_eq!(available.len(), 1);
        assert_eq!(available[0].remaining_tickets, 0);
        assert!(!available[0].is_bookable());
        assert_eq!(bookable_slots(&available).count(), 0);
    }

    #[test]
    fn overbooked_slot_clamps_to_zero() {
        let slots = vec![slot(10, SlotStatus::Available, 1)];
        let reservations = vec![
            reservation(1, 10, "CONFIRM"),
            reservation(2, 10, "CONFIRM"),
            reservation(3, 10, "CONFIRM"),
        ];

        let available = compute_availability(&slots, &reservations, &ReservationCountPolicy::CountAll);
        assert_eq!(available[0].remaining_tickets, 0);
    }

    #[test]
    fn non_available_statuses_are_excluded_even_with_capacity() {
        let slots = vec![
            slot(1, SlotStatus::Booked, 5),
            slot(2, SlotStatus::Cancelled, 5),
            slot(3, SlotStatus::Confirmed, 5),
            slot(4, SlotStatus::Unknown, 5),
            slot(5, SlotStatus::Available, 5),
        ];

        let available = compute_availability(&slots, &[], &ReservationCountPolicy::CountAll);

        assert_eq!(available.iter().map(AvailableSlot::id).collect::<Vec<_>>(), vec![5]);
        assert_eq!(available[0].remaining_tickets, 5);
    }

    #[test]
    fn reservations_for_other_slots_do_not_count() {
        let slots = vec![slot(10, SlotStatus::Available, 2), slot(11, SlotStatus::Available, 2)];
        let reservations = vec![reservation(1, 11, "CONFIRM"), reservation(2, 99, "CONFIRM")];

        let available = compute_availability(&slots, &reservations, &ReservationCountPolicy::CountAll);

        assert_eq!(available[0].remaining_tickets, 2);
        assert_eq!(available[1].remaining_tickets, 1);
    }

    #[test]
    fn backend_order_is_preserved() {
        let slots = vec![
            slot(30, SlotStatus::Available, 1),
            slot(10, SlotStatus::Booked, 1),
            slot(20, SlotStatus::Available, 1),
        ];

        let available = compute_availability(&slots, &[], &ReservationCountPolicy::CountAll);
        assert_eq!(available.iter().map(AvailableSlot::id).collect::<Vec<_>>(), vec![30, 20]);
    }

    #[test]
    fn cancelled_reservations_count_unless_excluded() {
        let slots = vec![slot(10, SlotStatus::Available, 2)];
        let reservations = vec![reservation(1, 10, "CONFIRM"), reservation(2, 10, "CANCELLED")];

        let all = compute_availability(&slots, &reservations, &ReservationCountPolicy::CountAll);
        assert_eq!(all[0].remaining_tickets, 0);

        let policy = ReservationCountPolicy::ExcludeStatuses(vec!["CANCELLED".to_string()]);
        let filtered = compute_availability(&slots, &reservations, &policy);
        assert_eq!(filtered[0].remaining_tickets, 1);
    }
}
