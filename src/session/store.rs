//! Session Store: the three collections one user session owns

use crate::assistant::ChatState;
use crate::domain::{ChatMessage, Event, EventId, Ngo};

/// Mutable domain state for one session. Callers hold the session lock for
/// every mutation, which is what keeps event ids unique.
#[derive(Debug)]
pub struct SessionStore {
    ngos: Vec<Ngo>,
    events: Vec<Event>,
    transcript: Vec<ChatMessage>,
    next_event_id: EventId,
    chat_state: ChatState,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Seeded NGO directory, no events, empty transcript
    pub fn new() -> Self {
        Self {
            ngos: Ngo::seed_directory(),
            events: Vec::new(),
            transcript: Vec::new(),
            next_event_id: 1,
            chat_state: ChatState::Idle,
        }
    }

    pub fn ngos(&self) -> &[Ngo] {
        &self.ngos
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Id the next appended event will receive
    #[cfg(test)]
    pub fn next_event_id(&self) -> EventId {
        self.next_event_id
    }

    /// Append an event, stamping it with the next id. Returns the stored copy.
    pub fn append_event(&mut self, mut event: Event) -> Event {
        event.id = self.next_event_id;
        self.next_event_id += 1;
        let stored = event.clone();
        self.events.push(event);
        stored
    }

    pub fn event_mut(&mut self, id: EventId) -> Option<&mut Event> {
        self.events.iter_mut().find(|e| e.id == id)
    }

    pub fn append_message(&mut self, message: ChatMessage) {
        self.transcript.push(message);
    }

    pub fn chat_state(&self) -> ChatState {
        self.chat_state
    }

    pub fn set_chat_state(&mut self, state: ChatState) {
        self.chat_state = state;
    }
}
