pub mod availability;
pub mod slots;

pub use availability::{AppointmentStore, AvailabilityService, BusinessDirectory, DEFAULT_DURATION_MINUTES};
pub use slots::{compute_available_slots, compute_available_slots_hhmm, SLOT_STEP_MINUTES};
