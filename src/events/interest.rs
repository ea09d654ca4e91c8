//! Interest Tracker

use crate::domain::{Event, EventId, NgoId};
use crate::error::{FoodBridgeError, Result};
use crate::session::SessionStore;

/// NGO recorded when the caller does not identify one
pub const DEFAULT_NGO_ID: NgoId = 1;

/// Record `ngo_id` against an event. Repeated calls record the id again;
/// the NGO id is not checked against the directory.
pub fn express_interest(
    store: &mut SessionStore,
    event_id: EventId,
    ngo_id: NgoId,
) -> Result<Event> {
    let event = store
        .event_mut(event_id)
        .ok_or_else(|| FoodBridgeError::NotFound(format!("Event #{event_id} not found")))?;

    event.interested_ngos.push(ngo_id);
    tracing::info!(event_id, ngo_id, "Interest recorded");
    Ok(event.clone())
}
