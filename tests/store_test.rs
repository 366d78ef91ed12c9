mod common;

use std::sync::Arc;

use common::{response_docs, seeded_store};
use opine::action::Action;
use opine::intent;
use opine::state::Store;

#[tokio::test]
async fn dispatch_notifies_subscribers() {
    let mut store = seeded_store();
    let mut rx = store.subscribe();

    let returned = store.dispatch(&intent::add_survey("Weekly Pulse"));

    rx.changed().await.unwrap();
    let seen = rx.borrow().clone();
    assert!(Arc::ptr_eq(&returned.surveys, &seen.surveys));
}

#[tokio::test]
async fn every_dispatch_wakes_receivers() {
    let mut store = Store::default();
    let mut rx = store.subscribe();

    store.dispatch(&intent::add_survey("One"));
    rx.changed().await.unwrap();

    store.dispatch(&intent::add_survey("Two"));
    rx.changed().await.unwrap();

    assert_eq!(rx.borrow().surveys.len(), 2);
}

#[test]
fn earlier_snapshots_survive_later_dispatches() {
    let mut store = seeded_store();
    let before = store.state();
    let count = before.surveys.len();

    store.dispatch(&intent::remove_survey("58ee63c65a2d576d5125b4bd"));

    assert_eq!(before.surveys.len(), count);
    assert!(before.surveys.contains_key("58ee63c65a2d576d5125b4bd"));
    assert_eq!(store.state().surveys.len(), count - 1);
}

#[test]
fn load_responses_adopts_the_normalized_payload() {
    let mut store = seeded_store();

    let action = intent::load_responses(&response_docs());
    let state = store.dispatch(&action);

    let Action::UpdateResponses { responses } = &action else {
        panic!("load_responses built the wrong action");
    };
    assert!(Arc::ptr_eq(&state.responses, responses));
}

#[test]
fn minted_ids_are_unique() {
    let a = intent::new_id();
    let b = intent::new_id();
    assert_ne!(a, b);
}

#[test]
fn wire_actions_parse_with_coerced_ids() {
    let action = intent::parse_action(r#"{"type": "ADD_SURVEY", "id": 4, "title": "Expanded"}"#)
        .unwrap();

    let Action::AddSurvey { id, title, .. } = action else {
        panic!("parsed the wrong variant");
    };
    assert_eq!(id, "4");
    assert_eq!(title, "Expanded");
}

#[test]
fn wire_actions_ignore_extra_fields() {
    let action = intent::parse_action(
        r#"{"type": "REMOVE_SURVEY", "id": "s1", "reason": "cleanup"}"#,
    );
    assert!(action.is_ok());
}

#[test]
fn unrecognized_wire_type_never_reaches_the_store() {
    assert!(intent::parse_action(r#"{"type": "NUKE_EVERYTHING"}"#).is_err());
    assert!(intent::parse_action("not json at all").is_err());
}

#[test]
fn edit_question_patch_parses_nested_data() {
    let action = intent::parse_action(
        r#"{"type": "EDIT_QUESTION", "id": "q1", "kind": "Text", "data": {"max": 140}}"#,
    )
    .unwrap();

    let Action::EditQuestion { id, data, .. } = action else {
        panic!("parsed the wrong variant");
    };
    assert_eq!(id, "q1");
    assert_eq!(data.max, Some(140));
    assert_eq!(data.title, None);
}
