//! API request and response types

use crate::assistant::ChatState;
use crate::domain::{Area, ChatMessage, Event, Ngo, NgoId};
use crate::session::SessionId;
use serde::{Deserialize, Serialize};

/// Response for session creation
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: SessionId,
}

/// Response for lifecycle actions
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct NgoListResponse {
    pub ngos: Vec<Ngo>,
}

#[derive(Debug, Serialize)]
pub struct EventListResponse {
    pub events: Vec<Event>,
}

/// Event as shown on the NGO page, with its heading
#[derive(Debug, Serialize)]
pub struct AvailableEvent {
    pub title: String,
    #[serde(flatten)]
    pub event: Event,
}

#[derive(Debug, Serialize)]
pub struct AvailableEventsResponse {
    pub events: Vec<AvailableEvent>,
}

/// Response for a listed event or recorded interest
#[derive(Debug, Serialize)]
pub struct EventActionResponse {
    pub event: Event,
    pub message: String,
}

/// Request to express interest; an omitted `ngo_id` records the default NGO
#[derive(Debug, Default, Deserialize)]
pub struct InterestRequest {
    #[serde(default)]
    pub ngo_id: Option<NgoId>,
}

/// Request to send a chat message
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub messages: Vec<ChatMessage>,
    pub state: ChatState,
}

#[derive(Debug, Serialize)]
pub struct AreasResponse {
    pub areas: Vec<Area>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
