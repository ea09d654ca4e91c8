//! Instruction block and request construction

use crate::domain::{ChatMessage, Role};
use crate::llm::{LlmMessage, LlmRequest};

/// Fixed platform description sent ahead of every conversation
pub const INSTRUCTIONS: &str = "You are the FoodBridge Assistant, helping users navigate the FoodBridge platform.

FoodBridge connects event organizers with nearby NGOs to reduce food waste by donating surplus food.

Key features include:
1. Event organizers can list events with expected food surplus
2. NGOs receive advance notifications about nearby events
3. Location-based matching connects events with closest NGOs
4. Optional transportation mediation services
5. Real-time coordination between organizers and NGOs

For event organizers: Help them list events, understand the process, and coordinate donations.
For NGOs: Help them find nearby events, understand notification systems, and coordinate pickups.";

/// The most recent `max` messages of `prior`, trimmed so the window opens on
/// a user turn.
pub fn history_window(prior: &[ChatMessage], max: usize) -> &[ChatMessage] {
    let start = prior.len().saturating_sub(max);
    let tail = &prior[start..];
    let first_user = tail
        .iter()
        .position(|m| m.role == Role::User)
        .unwrap_or(tail.len());
    &tail[first_user..]
}

/// Instructions, the windowed prior transcript as alternating turns, then
/// the new utterance.
pub fn build_request(prior: &[ChatMessage], user_text: &str, max_history: usize) -> LlmRequest {
    let mut messages: Vec<LlmMessage> = history_window(prior, max_history)
        .iter()
        .map(|m| match m.role {
            Role::User => LlmMessage::user(m.content.clone()),
            Role::Assistant => LlmMessage::assistant(m.content.clone()),
        })
        .collect();
    messages.push(LlmMessage::user(user_text));

    LlmRequest {
        system: INSTRUCTIONS.to_string(),
        messages,
        max_tokens: None,
    }
}
