//! Event listing and interest tracking
//!
//! Both operate on a locked [`SessionStore`](crate::session::SessionStore);
//! the caller owns the lock.

mod interest;
mod registry;

#[cfg(test)]
mod proptests;

pub use interest::{express_interest, DEFAULT_NGO_ID};
pub use registry::{list_by_status, submit_event, EventSubmission};
