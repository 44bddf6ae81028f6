use std::sync::Once;

use govdocs_core::{
    update, AppState, Effect, Msg, Notification, PlainDocument, RequestFailure, RetrievalResult,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(govdocs_logging::initialize_for_tests);
}

fn populated_state() -> AppState {
    let doc = PlainDocument {
        id: Some("1".to_string()),
        website: "incometaxindia.gov.in".to_string(),
        title: "Circular".to_string(),
        description: Some("Circular".to_string()),
        date: None,
        content: "Circular".to_string(),
        link: "https://incometaxindia.gov.in/c.pdf".to_string(),
        scraped_at: None,
        csv_data: None,
        table_index: None,
    };
    let state = update(AppState::new(), Msg::TotalRefreshed { result: Ok(12) }).0;
    let state = update(state, Msg::SourceToggled("Income Tax".into())).0;
    let (state, _) = update(state, Msg::QueryClicked);
    update(
        state,
        Msg::RetrievalFinished {
            seq: 1,
            result: Ok(RetrievalResult::Flat(vec![doc])),
        },
    )
    .0
}

#[test]
fn confirm_without_request_does_nothing() {
    init_logging();
    let state = populated_state();
    let (next, effects) = update(state.clone(), Msg::ClearDatabaseConfirmed);

    assert!(effects.is_empty());
    assert_eq!(next.total_count(), 12);
    assert_eq!(next.results(), state.results());
}

#[test]
fn request_alone_only_arms_confirmation() {
    init_logging();
    let (state, effects) = update(populated_state(), Msg::ClearDatabaseRequested);

    assert!(effects.is_empty());
    assert!(state.view().awaiting_clear_confirmation);
    assert_eq!(state.total_count(), 12);
}

#[test]
fn cancelled_confirmation_does_not_clear() {
    init_logging();
    let (state, _) = update(populated_state(), Msg::ClearDatabaseRequested);
    let (state, _) = update(state, Msg::ClearDatabaseCancelled);
    let (state, effects) = update(state, Msg::ClearDatabaseConfirmed);

    assert!(effects.is_empty());
    assert!(!state.view().awaiting_clear_confirmation);
}

#[test]
fn confirmed_clear_resets_results_and_total() {
    init_logging();
    let (state, _) = update(populated_state(), Msg::ClearDatabaseRequested);
    let (state, effects) = update(state, Msg::ClearDatabaseConfirmed);
    assert_eq!(effects, vec![Effect::ClearDatabase { seq: 2 }]);
    assert!(state.is_clearing());
    assert!(!state.view().clear_enabled);

    // A second request while in flight is not armed.
    let (state, effects) = update(state, Msg::ClearDatabaseRequested);
    assert!(effects.is_empty());
    assert!(!state.view().awaiting_clear_confirmation);

    let (state, _) = update(
        state,
        Msg::ClearFinished {
            seq: 2,
            result: Ok(()),
        },
    );
    assert!(!state.is_clearing());
    assert_eq!(state.total_count(), 0);
    assert!(state.results().is_empty());
    assert!(matches!(state.notification(), Some(Notification::Success(_))));
}

#[test]
fn failed_clear_keeps_data() {
    init_logging();
    let (state, _) = update(populated_state(), Msg::ClearDatabaseRequested);
    let (state, _) = update(state, Msg::ClearDatabaseConfirmed);
    let (state, _) = update(
        state,
        Msg::ClearFinished {
            seq: 2,
            result: Err(RequestFailure::HttpStatus(500)),
        },
    );

    assert_eq!(state.total_count(), 12);
    assert_eq!(state.results().plain_documents.len(), 1);
    assert!(state.notification().unwrap().is_error());
}
