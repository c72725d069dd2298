pub mod appointment;
pub mod business;
pub mod time;

// Re-export the domain types for external use
pub use appointment::{Appointment, AppointmentStatus};
pub use business::{WeeklyWorkingHours, WorkingWindow};
pub use time::{InvalidTimeOfDay, TimeOfDay};
