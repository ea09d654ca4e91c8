//! Event Registry: admit new events and query them by status

use crate::domain::{Area, Event, EventStatus};
use crate::error::{FoodBridgeError, Result};
use crate::session::SessionStore;
use chrono::NaiveDate;
use serde::Deserialize;
use std::ops::RangeInclusive;

pub const MIN_GUESTS: u32 = 1;
pub const SURPLUS_RANGE: RangeInclusive<u32> = 5..=500;

/// An organizer's event form
#[derive(Debug, Clone, Deserialize)]
pub struct EventSubmission {
    #[serde(default)]
    pub name: String,
    pub date: NaiveDate,
    pub location: Area,
    #[serde(default = "default_guests")]
    pub guests: u32,
    #[serde(default = "default_surplus")]
    pub surplus: u32,
    #[serde(default)]
    pub transport_help: bool,
    #[serde(default)]
    pub info: String,
}

fn default_guests() -> u32 {
    100
}

fn default_surplus() -> u32 {
    50
}

impl EventSubmission {
    /// Reject what the form widgets would have prevented, plus a blank name.
    fn validate(&self, today: NaiveDate) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(FoodBridgeError::Validation(
                "Event name is required".to_string(),
            ));
        }
        if self.date < today {
            return Err(FoodBridgeError::Validation(format!(
                "Event date {} is in the past",
                self.date
            )));
        }
        if self.guests < MIN_GUESTS {
            return Err(FoodBridgeError::Validation(format!(
                "Expected guests must be at least {MIN_GUESTS}"
            )));
        }
        if !SURPLUS_RANGE.contains(&self.surplus) {
            return Err(FoodBridgeError::Validation(format!(
                "Expected surplus must be between {} and {} meals",
                SURPLUS_RANGE.start(),
                SURPLUS_RANGE.end()
            )));
        }
        Ok(())
    }
}

/// Validate and list a new event. On failure the store is untouched.
pub fn submit_event(
    store: &mut SessionStore,
    submission: EventSubmission,
    today: NaiveDate,
) -> Result<Event> {
    submission.validate(today)?;

    // id is stamped by the store
    let event = store.append_event(Event {
        id: 0,
        name: submission.name,
        date: submission.date,
        location: submission.location,
        guests: submission.guests,
        surplus: submission.surplus,
        transport_help: submission.transport_help,
        info: submission.info,
        status: EventStatus::Listed,
        interested_ngos: Vec::new(),
    });

    tracing::info!(
        event_id = event.id,
        location = %event.location,
        surplus = event.surplus,
        "Event listed"
    );
    Ok(event)
}

/// Events whose status string matches `status` exactly, in insertion order.
/// Recomputed on every call.
pub fn list_by_status<'a>(
    store: &'a SessionStore,
    status: &'a str,
) -> impl Iterator<Item = &'a Event> + 'a {
    store
        .events()
        .iter()
        .filter(move |event| event.status.as_str() == status)
}
