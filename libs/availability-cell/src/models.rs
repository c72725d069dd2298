// libs/availability-cell/src/models.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::{Appointment, InvalidTimeOfDay, TimeOfDay};

// ==============================================================================
// SLOT COMPUTATION MODELS
// ==============================================================================

/// The time range held by an existing, non-cancelled appointment. Immutable
/// snapshot for the duration of one computation; `start < end` is guaranteed
/// by the appointment store, and overlaps between ranges carry no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedRange {
    #[serde(rename = "startTime")]
    pub start: TimeOfDay,
    #[serde(rename = "endTime")]
    pub end: TimeOfDay,
}

impl BookedRange {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Derive the booked range for an appointment snapshot. Cancelled
    /// appointments release their range and yield `None`; malformed stored
    /// times fail fast instead of producing wrong slots.
    pub fn from_appointment(appointment: &Appointment) -> Result<Option<Self>, AvailabilityError> {
        if appointment.status.is_cancelled() {
            return Ok(None);
        }

        let start = appointment.start_time.parse()?;
        let end = appointment.end_time.parse()?;
        Ok(Some(Self { start, end }))
    }
}

/// A bookable window of the requested service duration. Produced fresh on
/// every computation; it has no identity beyond its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableSlot {
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

/// One slot computation's full input, assembled per request and discarded
/// after use. `open < close` is the caller's responsibility (checked via the
/// working window's closed flag before the query is built).
#[derive(Debug, Clone)]
pub struct SlotQuery {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
    pub booked_ranges: Vec<BookedRange>,
    pub duration_minutes: i32,
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

/// Booked range as it arrives over the wire, raw `"HH:MM"` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedRangeRequest {
    pub start_time: String,
    pub end_time: String,
}

impl TryFrom<&BookedRangeRequest> for BookedRange {
    type Error = InvalidTimeOfDay;

    fn try_from(request: &BookedRangeRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            start: request.start_time.parse()?,
            end: request.end_time.parse()?,
        })
    }
}

/// Availability for one business on one date. An empty slot list with
/// `is_closed: false` means the day is fully booked or too short for the
/// requested duration; `is_closed: true` means the engine was never run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub is_closed: bool,
    pub available_slots: Vec<AvailableSlot>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug)]
pub enum AvailabilityError {
    #[error("invalid time format: {0}")]
    InvalidTimeFormat(#[from] InvalidTimeOfDay),

    #[error("invalid duration {0}: must be a positive number of minutes")]
    InvalidDuration(i32),

    #[error("{0} not found")]
    NotFound(String),

    #[error("store error: {0}")]
    Store(String),
}
