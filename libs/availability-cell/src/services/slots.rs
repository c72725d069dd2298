//! The slot availability engine: a stateless, pure computation mapping a
//! [`SlotQuery`] to the ordered list of bookable windows. Safe to call
//! concurrently; no I/O, no shared state.

use shared_models::TimeOfDay;

use crate::models::{AvailabilityError, AvailableSlot, BookedRange, BookedRangeRequest, SlotQuery};

/// Candidate starts are generated on a fixed half-hour grid from opening
/// time, independent of the requested duration. When the duration exceeds
/// the step, returned slots overlap each other; the engine only filters
/// against booked ranges, it does not thin the candidate grid.
pub const SLOT_STEP_MINUTES: u16 = 30;

/// Compute every bookable slot of `duration_minutes` within the open/close
/// bounds, skipping candidates that conflict with a booked range. The result
/// is in ascending start order and may be empty (a fully booked day, or a
/// window shorter than the duration, is not an error).
pub fn compute_available_slots(query: &SlotQuery) -> Result<Vec<AvailableSlot>, AvailabilityError> {
    let duration = query.duration_minutes;
    if duration <= 0 {
        return Err(AvailabilityError::InvalidDuration(duration));
    }

    // A duration that cannot fit inside a single day can never fit the
    // window either; that is a valid empty result.
    let Ok(duration) = u16::try_from(duration) else {
        return Ok(Vec::new());
    };

    let mut slots = Vec::new();
    let mut start_time = query.open;

    loop {
        // Checked construction keeps every end time within the same day;
        // candidates must also fit entirely before closing time.
        let Some(end_time) = start_time.checked_add_minutes(duration) else {
            break;
        };
        if end_time > query.close {
            break;
        }

        let has_conflict = query
            .booked_ranges
            .iter()
            .any(|booked| conflicts(start_time, end_time, booked));

        if !has_conflict {
            slots.push(AvailableSlot {
                start_time,
                end_time,
            });
        }

        match start_time.checked_add_minutes(SLOT_STEP_MINUTES) {
            Some(next) => start_time = next,
            None => break,
        }
    }

    Ok(slots)
}

/// The `"HH:MM"` boundary of the engine. Parsing is total: malformed or
/// empty strings fail with an invalid-time-format error rather than being
/// clamped or guessed at.
pub fn compute_available_slots_hhmm(
    open_time: &str,
    close_time: &str,
    booked_ranges: &[BookedRangeRequest],
    duration_minutes: i32,
) -> Result<Vec<AvailableSlot>, AvailabilityError> {
    let open: TimeOfDay = open_time.parse()?;
    let close: TimeOfDay = close_time.parse()?;
    let booked_ranges = booked_ranges
        .iter()
        .map(BookedRange::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    compute_available_slots(&SlotQuery {
        open,
        close,
        booked_ranges,
        duration_minutes,
    })
}

/// Conflict check between a candidate slot and a booked range.
///
/// Kept as three separate cases rather than a single interval-overlap test:
/// the boundary semantics matter. A candidate that merely touches a booking
/// (its end equals the booking's start, or its start equals the booking's
/// end) does NOT conflict, so back-to-back bookings stay possible.
fn conflicts(slot_start: TimeOfDay, slot_end: TimeOfDay, booked: &BookedRange) -> bool {
    // (a) the candidate starts inside the booking
    (slot_start >= booked.start && slot_start < booked.end)
        // (b) the candidate ends inside the booking
        || (slot_end > booked.start && slot_end <= booked.end)
        // (c) the candidate fully covers the booking
        || (slot_start <= booked.start && slot_end >= booked.end)
}
