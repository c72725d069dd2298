pub mod models;
pub mod services;

// Re-export the cell surface for external use
pub use models::{
    AvailabilityError, AvailableSlot, BookedRange, BookedRangeRequest, DayAvailability, SlotQuery,
};
pub use services::*;
