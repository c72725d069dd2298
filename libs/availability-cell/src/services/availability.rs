use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, warn};
use uuid::Uuid;

use shared_models::{Appointment, TimeOfDay, WorkingWindow};

use crate::models::{AvailabilityError, BookedRange, DayAvailability, SlotQuery};
use crate::services::slots::compute_available_slots;

/// Duration used when the caller does not request one.
pub const DEFAULT_DURATION_MINUTES: i32 = 60;

/// Business-configuration collaborator: resolves the working window that
/// applies to a business on a given calendar date (implementations map the
/// date to its weekday entry in the weekly schedule).
#[async_trait]
pub trait BusinessDirectory: Send + Sync {
    async fn working_window(
        &self,
        business_id: Uuid,
        date: NaiveDate,
    ) -> Result<WorkingWindow, AvailabilityError>;
}

/// Appointment-store collaborator: every appointment recorded for the
/// business on the date. Implementations may pre-filter cancelled entries;
/// the service filters them again either way.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    async fn appointments_for_date(
        &self,
        business_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, AvailabilityError>;
}

pub struct AvailabilityService {
    directory: Arc<dyn BusinessDirectory>,
    appointments: Arc<dyn AppointmentStore>,
}

impl AvailabilityService {
    pub fn new(directory: Arc<dyn BusinessDirectory>, appointments: Arc<dyn AppointmentStore>) -> Self {
        Self {
            directory,
            appointments,
        }
    }

    /// Calculate the available slots for a business on a date.
    ///
    /// Closed days short-circuit to an empty, closed-marked result without
    /// the engine ever running. An open day with no free slots is a success
    /// with an empty list, never an error.
    pub async fn available_slots(
        &self,
        business_id: Uuid,
        date: NaiveDate,
        duration_minutes: Option<i32>,
    ) -> Result<DayAvailability, AvailabilityError> {
        let duration = duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES);
        if duration <= 0 {
            return Err(AvailabilityError::InvalidDuration(duration));
        }

        debug!("Calculating available slots for business {} on {}", business_id, date);

        let window = self.directory.working_window(business_id, date).await?;

        if window.is_closed {
            debug!("Business {} is closed on {}", business_id, date);
            return Ok(DayAvailability {
                date,
                is_closed: true,
                available_slots: vec![],
            });
        }

        let open = parse_bound(window.open.as_deref())?;
        let close = parse_bound(window.close.as_deref())?;
        if open >= close {
            warn!("Business {} has an inverted working window on {}: {} >= {}", business_id, date, open, close);
        }

        let appointments = self.appointments.appointments_for_date(business_id, date).await?;
        let booked_ranges = booked_ranges_of(&appointments)?;

        let available_slots = compute_available_slots(&SlotQuery {
            open,
            close,
            booked_ranges,
            duration_minutes: duration,
        })?;

        debug!("Found {} available slots", available_slots.len());

        Ok(DayAvailability {
            date,
            is_closed: false,
            available_slots,
        })
    }
}

/// Missing open/close bounds on a non-closed day are treated exactly like
/// malformed ones: fail fast rather than guess.
fn parse_bound(raw: Option<&str>) -> Result<TimeOfDay, AvailabilityError> {
    Ok(raw.unwrap_or_default().parse::<TimeOfDay>()?)
}

fn booked_ranges_of(appointments: &[Appointment]) -> Result<Vec<BookedRange>, AvailabilityError> {
    let mut booked_ranges = Vec::with_capacity(appointments.len());
    for appointment in appointments {
        if let Some(range) = BookedRange::from_appointment(appointment)? {
            booked_ranges.push(range);
        }
    }
    Ok(booked_ranges)
}
