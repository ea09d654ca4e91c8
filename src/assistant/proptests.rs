//! Property-based tests for the chat turn contract

use super::prompt::history_window;
use super::*;
use crate::domain::{ChatMessage, Role};
use crate::llm::testing::MockLlmService;
use crate::llm::LlmError;
use proptest::prelude::*;
use tokio::sync::Mutex;

fn arb_message() -> impl Strategy<Value = ChatMessage> {
    (any::<bool>(), "[a-z]{1,8}").prop_map(|(user, text)| {
        if user {
            ChatMessage::user(text)
        } else {
            ChatMessage::assistant(text)
        }
    })
}

proptest! {
    #[test]
    fn window_is_a_bounded_suffix_starting_on_user(
        prior in proptest::collection::vec(arb_message(), 0..30),
        max in 0usize..40,
    ) {
        let window = history_window(&prior, max);
        prop_assert!(window.len() <= max);
        prop_assert!(prior.ends_with(window));
        if let Some(first) = window.first() {
            prop_assert_eq!(first.role, Role::User);
        }
    }

    #[test]
    fn successful_turns_append_two_messages_each(outcomes in proptest::collection::vec(any::<bool>(), 1..12)) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        runtime.block_on(async {
            let mock = Arc::new(MockLlmService::new("mock"));
            let assistant = Assistant::new(mock.clone(), 10);
            let session = Arc::new(Mutex::new(crate::session::SessionStore::new()));

            let mut successes = 0;
            let mut failures = 0;
            for (i, ok) in outcomes.iter().enumerate() {
                if *ok {
                    mock.queue_reply(format!("reply {i}"));
                } else {
                    mock.queue_error(LlmError::server_error("down"));
                }
                let result = assistant.submit(&session, format!("turn {i}")).await;
                prop_assert_eq!(result.is_ok(), *ok);
                if *ok { successes += 1 } else { failures += 1 }

                let store = session.lock().await;
                prop_assert_eq!(store.transcript().len(), 2 * successes + failures);
                prop_assert_eq!(store.chat_state(), ChatState::Idle);
            }
            Ok(())
        })?;
    }
}
