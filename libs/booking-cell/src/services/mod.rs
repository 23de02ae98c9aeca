pub mod availability;
pub mod reconciler;
pub mod view;

pub use availability::{bookable_slots, compute_availability};
pub use reconciler::AvailabilityReconciler;
pub use view::{AvailabilityView, ViewState, ViewTicket};
