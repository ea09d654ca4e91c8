//! Pure chat turn state machine
//!
//! `Idle --UserMessage--> AwaitingReply --ReplyReceived|UpstreamFailed--> Idle`

use crate::domain::ChatMessage;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatState {
    #[default]
    Idle,
    AwaitingReply,
}

/// Events that drive a chat turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    UserMessage { text: String },
    ReplyReceived { text: String },
    UpstreamFailed,
}

/// Effects for the caller to carry out after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    AppendMessage(ChatMessage),
    RequestReply,
}

#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: ChatState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    fn new(state: ChatState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Assistant is busy, cannot accept message")]
    Busy,
    #[error("Message is empty")]
    EmptyMessage,
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

pub fn transition(state: ChatState, event: ChatEvent) -> Result<TransitionResult, TransitionError> {
    match (state, event) {
        (ChatState::Idle, ChatEvent::UserMessage { text }) => {
            if text.trim().is_empty() {
                return Err(TransitionError::EmptyMessage);
            }
            Ok(TransitionResult::new(ChatState::AwaitingReply)
                .with_effect(Effect::AppendMessage(ChatMessage::user(text)))
                .with_effect(Effect::RequestReply))
        }

        (ChatState::AwaitingReply, ChatEvent::UserMessage { .. }) => Err(TransitionError::Busy),

        (ChatState::AwaitingReply, ChatEvent::ReplyReceived { text }) => {
            Ok(TransitionResult::new(ChatState::Idle)
                .with_effect(Effect::AppendMessage(ChatMessage::assistant(text))))
        }

        // The user message stays in the transcript; nothing else is recorded.
        (ChatState::AwaitingReply, ChatEvent::UpstreamFailed) => {
            Ok(TransitionResult::new(ChatState::Idle))
        }

        (state, event) => Err(TransitionError::InvalidTransition(format!(
            "{event:?} in state {state:?}"
        ))),
    }
}
