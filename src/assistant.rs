//! Conversational assistant
//!
//! One reply per user utterance, grounded by a fixed instruction block and
//! the session's prior transcript. No retries, no streaming.

mod prompt;
#[cfg(test)]
mod proptests;
mod transition;

pub use prompt::build_request;
pub use transition::{transition, ChatEvent, ChatState, Effect, TransitionError, TransitionResult};

use crate::error::{FoodBridgeError, Result};
use crate::llm::{LlmError, LlmResponse, LlmService};
use crate::session::{SessionHandle, SessionStore};
use std::sync::Arc;

impl From<TransitionError> for FoodBridgeError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::Busy | TransitionError::InvalidTransition(_) => {
                FoodBridgeError::AssistantBusy
            }
            TransitionError::EmptyMessage => FoodBridgeError::Validation(err.to_string()),
        }
    }
}

pub struct Assistant {
    llm: Arc<dyn LlmService>,
    history_messages: usize,
}

impl Assistant {
    pub fn new(llm: Arc<dyn LlmService>, history_messages: usize) -> Self {
        Self {
            llm,
            history_messages,
        }
    }

    /// Run one chat turn against `session` and return the reply verbatim.
    ///
    /// The user message is recorded before the model is called. The session
    /// lock is released for the duration of the call, and the call runs on
    /// its own task so the turn settles even if the caller goes away.
    pub async fn submit(&self, session: &SessionHandle, user_text: String) -> Result<String> {
        let request = {
            let mut store = session.lock().await;
            let result = transition(
                store.chat_state(),
                ChatEvent::UserMessage {
                    text: user_text.clone(),
                },
            )?;
            let request = build_request(store.transcript(), &user_text, self.history_messages);
            apply(&mut store, result);
            request
        };

        let llm = self.llm.clone();
        let task_session = session.clone();
        let turn = tokio::spawn(async move {
            let outcome = llm.complete(&request).await;
            let mut store = task_session.lock().await;
            finish_turn(&mut store, outcome)
        })
        .await;

        match turn {
            Ok(result) => result,
            Err(e) => {
                // the task died before settling; release the turn here
                let mut store = session.lock().await;
                settle(&mut store, ChatEvent::UpstreamFailed);
                Err(LlmError::unknown(format!("Assistant task failed: {e}")).into())
            }
        }
    }
}

fn finish_turn(
    store: &mut SessionStore,
    outcome: std::result::Result<LlmResponse, LlmError>,
) -> Result<String> {
    match outcome {
        Ok(response) => {
            settle(
                store,
                ChatEvent::ReplyReceived {
                    text: response.text.clone(),
                },
            );
            Ok(response.text)
        }
        Err(e) => {
            settle(store, ChatEvent::UpstreamFailed);
            Err(e.into())
        }
    }
}

fn settle(store: &mut SessionStore, event: ChatEvent) {
    match transition(store.chat_state(), event) {
        Ok(result) => apply(store, result),
        Err(e) => {
            tracing::warn!(error = %e, "Unexpected chat state, resetting to idle");
            store.set_chat_state(ChatState::Idle);
        }
    }
}

fn apply(store: &mut SessionStore, result: TransitionResult) {
    store.set_chat_state(result.new_state);
    for effect in result.effects {
        match effect {
            Effect::AppendMessage(message) => store.append_message(message),
            // performed by `submit` once the lock is released
            Effect::RequestReply => {}
        }
    }
}
