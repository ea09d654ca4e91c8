//! Per-session state and the registry of live sessions

mod registry;
mod store;

pub use registry::{SessionHandle, SessionId, SessionRegistry};
pub use store::SessionStore;
