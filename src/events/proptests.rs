//! Property-based tests for event listing and interest tracking

use super::*;
use crate::domain::{Area, EventId};
use crate::session::SessionStore;
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn arb_area() -> impl Strategy<Value = Area> {
    proptest::sample::select(Area::ALL.to_vec())
}

/// Submissions that pass validation
fn arb_valid_submission() -> impl Strategy<Value = EventSubmission> {
    (
        "[A-Za-z][A-Za-z ]{0,20}",
        0i64..365,
        arb_area(),
        1u32..1000,
        5u32..=500,
        any::<bool>(),
        "[a-z ]{0,20}",
    )
        .prop_map(
            |(name, offset, location, guests, surplus, transport_help, info)| EventSubmission {
                name,
                date: today() + Duration::days(offset),
                location,
                guests,
                surplus,
                transport_help,
                info,
            },
        )
}

/// Either a valid submission or one with a blank name
fn arb_submission() -> impl Strategy<Value = EventSubmission> {
    prop_oneof![
        3 => arb_valid_submission(),
        1 => (arb_valid_submission(), "[ \t]{0,3}").prop_map(|(s, blank)| EventSubmission {
            name: blank,
            ..s
        }),
    ]
}

proptest! {
    #[test]
    fn ids_follow_prior_count(submissions in proptest::collection::vec(arb_submission(), 0..30)) {
        let mut store = SessionStore::new();
        for submission in submissions {
            let prior = store.events().len();
            let blank = submission.name.trim().is_empty();
            match submit_event(&mut store, submission, today()) {
                Ok(event) => {
                    prop_assert!(!blank);
                    prop_assert_eq!(event.id as usize, prior + 1);
                    prop_assert_eq!(event.status.as_str(), "Listed");
                    prop_assert_eq!(store.events().len(), prior + 1);
                }
                Err(_) => {
                    prop_assert!(blank);
                    prop_assert_eq!(store.events().len(), prior);
                }
            }
        }
    }

    #[test]
    fn listing_preserves_insertion_order(submissions in proptest::collection::vec(arb_valid_submission(), 0..20)) {
        let mut store = SessionStore::new();
        let mut expected = Vec::new();
        for submission in submissions {
            expected.push(submit_event(&mut store, submission, today()).unwrap().id);
        }
        let listed: Vec<EventId> = list_by_status(&store, "Listed").map(|e| e.id).collect();
        prop_assert_eq!(listed, expected);
    }

    #[test]
    fn interest_is_append_only(
        ngo_ids in proptest::collection::vec(1u32..5, 0..20),
        missing in 2u32..100,
    ) {
        let mut store = SessionStore::new();
        let submission = EventSubmission {
            name: "Gala".to_string(),
            date: today(),
            location: Area::Downtown,
            guests: 10,
            surplus: 10,
            transport_help: false,
            info: String::new(),
        };
        submit_event(&mut store, submission, today()).unwrap();

        for ngo in &ngo_ids {
            express_interest(&mut store, 1, *ngo).unwrap();
        }
        prop_assert!(express_interest(&mut store, missing, 1).is_err());
        prop_assert_eq!(&store.events()[0].interested_ngos, &ngo_ids);
    }
}
