//! HTTP API through which the presentation layer reaches the core

mod handlers;
mod types;

pub use handlers::create_router;
#[allow(unused_imports)] // Public API re-exports
pub use types::*;

use crate::assistant::Assistant;
use crate::session::SessionRegistry;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionRegistry>,
    pub assistant: Arc<Assistant>,
}

impl AppState {
    pub fn new(sessions: Arc<SessionRegistry>, assistant: Assistant) -> Self {
        Self {
            sessions,
            assistant: Arc::new(assistant),
        }
    }
}
