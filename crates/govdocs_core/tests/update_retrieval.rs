use std::sync::Once;

use govdocs_core::{
    summarize, update, AppState, Effect, FilterQuery, Msg, Notification, PlainDocument,
    RequestFailure, RequestState, ResultSet, ResultSummary, RetrievalMode, RetrievalResult, Tile,
    TiledDocument,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(govdocs_logging::initialize_for_tests);
}

fn plain(title: &str) -> PlainDocument {
    PlainDocument {
        id: None,
        website: "rbi.org.in".to_string(),
        title: title.to_string(),
        description: None,
        date: Some("28 October 2025".to_string()),
        content: format!("{title} body"),
        link: format!("https://rbi.org.in/{title}"),
        scraped_at: None,
        csv_data: None,
        table_index: None,
    }
}

fn tiled(title: &str, tiles: usize) -> TiledDocument {
    TiledDocument {
        id: Some("doc-1".to_string()),
        website: "gstcouncil.gov.in".to_string(),
        original_title: title.to_string(),
        date: None,
        link: "https://gstcouncil.gov.in/press.pdf".to_string(),
        tiles: (0..tiles)
            .map(|i| Tile {
                heading: format!("Heading {i}"),
                description: "Plain words".to_string(),
                csv_insights: None,
            })
            .collect(),
    }
}

fn query_state(sources: &[&str], keywords: &[&str]) -> (AppState, Vec<Effect>) {
    let mut state = AppState::new();
    for id in sources {
        state = update(state, Msg::SourceToggled(id.to_string())).0;
    }
    for keyword in keywords {
        state = update(state, Msg::KeywordInputChanged(keyword.to_string())).0;
        state = update(state, Msg::KeywordSubmitted).0;
    }
    update(state, Msg::QueryClicked)
}

#[test]
fn summarize_counts_both_tracks() {
    let results = ResultSet {
        tiled_documents: vec![tiled("GST notice", 3)],
        plain_documents: vec![plain("d1"), plain("d2")],
    };
    assert_eq!(
        summarize(&results),
        ResultSummary {
            total_docs: 3,
            tiled_count: 1,
            plain_count: 2,
            aggregate_tile_count: 3,
        }
    );
    assert_eq!(summarize(&ResultSet::default()), ResultSummary::default());
}

#[test]
fn query_without_sources_never_dispatches() {
    init_logging();
    let (state, effects) = query_state(&[], &["tax"]);

    assert!(effects.is_empty());
    assert_eq!(state.retrieval_state(), RequestState::Idle);
    assert!(matches!(state.notification(), Some(Notification::Error(_))));
}

#[test]
fn query_dispatches_filter_query_with_mode() {
    init_logging();
    let (state, effects) = query_state(&["RBI"], &[" repo rate ", "  "]);

    assert_eq!(
        effects,
        vec![Effect::Retrieve {
            seq: 1,
            query: FilterQuery {
                sources: vec!["RBI".to_string()],
                keywords: Some(vec!["repo rate".to_string()]),
            },
            mode: RetrievalMode::Process,
        }]
    );
    assert_eq!(state.retrieval_state(), RequestState::InFlight);
    assert!(!state.view().query_enabled);
}

#[test]
fn partitioned_result_is_stored_and_summarized() {
    init_logging();
    let (state, _) = query_state(&["RBI", "GST Council"], &[]);
    let (state, _) = update(
        state,
        Msg::RetrievalFinished {
            seq: 1,
            result: Ok(RetrievalResult::Partitioned {
                tiled: vec![tiled("GST notice", 3)],
                plain: vec![plain("d1"), plain("d2")],
                reported_tiles: Some(3),
            }),
        },
    );

    let view = state.view();
    assert_eq!(view.retrieval, RequestState::Succeeded);
    assert_eq!(view.summary.total_docs, 3);
    assert_eq!(view.summary.aggregate_tile_count, 3);
    assert_eq!(view.tiled_documents.len(), 1);
    assert_eq!(view.plain_documents.len(), 2);

    let Some(Notification::Success(text)) = view.notification else {
        panic!("expected success");
    };
    assert!(text.contains("Found 3 documents"), "{text}");
    assert!(text.contains("RBI, GST Council"), "{text}");
    assert!(text.contains("1 AI-analyzed document(s) with 3 tiles"), "{text}");
}

#[test]
fn flat_result_becomes_plain_documents() {
    init_logging();
    let (state, _) = query_state(&["RBI"], &["tax"]);
    let (state, _) = update(
        state,
        Msg::RetrievalFinished {
            seq: 1,
            result: Ok(RetrievalResult::Flat(vec![plain("d1")])),
        },
    );

    assert!(state.results().tiled_documents.is_empty());
    assert_eq!(state.results().plain_documents, vec![plain("d1")]);
    let text = state.notification().unwrap().text().to_string();
    assert!(text.contains("\"tax\""), "{text}");
    assert!(!text.contains("AI-analyzed"), "{text}");
}

#[test]
fn empty_result_names_sources_as_error() {
    init_logging();
    let (state, _) = query_state(&["RBI"], &[]);
    let (state, _) = update(
        state,
        Msg::RetrievalFinished {
            seq: 1,
            result: Ok(RetrievalResult::Partitioned {
                tiled: Vec::new(),
                plain: Vec::new(),
                reported_tiles: Some(0),
            }),
        },
    );

    assert_eq!(state.retrieval_state(), RequestState::Succeeded);
    let Some(Notification::Error(text)) = state.notification() else {
        panic!("expected error, got {:?}", state.notification());
    };
    assert!(text.contains("RBI"), "{text}");
}

#[test]
fn results_are_replaced_wholesale() {
    init_logging();
    let (state, _) = query_state(&["RBI"], &[]);
    let (state, _) = update(
        state,
        Msg::RetrievalFinished {
            seq: 1,
            result: Ok(RetrievalResult::Flat(vec![plain("d1"), plain("d2")])),
        },
    );
    let (state, _) = update(state, Msg::QueryClicked);
    let (state, _) = update(
        state,
        Msg::RetrievalFinished {
            seq: 2,
            result: Ok(RetrievalResult::Flat(vec![plain("d3")])),
        },
    );

    assert_eq!(state.results().plain_documents, vec![plain("d3")]);
}

#[test]
fn retrieval_failure_keeps_previous_results() {
    init_logging();
    let (state, _) = query_state(&["RBI"], &[]);
    let (state, _) = update(
        state,
        Msg::RetrievalFinished {
            seq: 1,
            result: Ok(RetrievalResult::Flat(vec![plain("d1")])),
        },
    );
    let (state, _) = update(state, Msg::QueryClicked);
    let (state, _) = update(
        state,
        Msg::RetrievalFinished {
            seq: 2,
            result: Err(RequestFailure::HttpStatus(503)),
        },
    );

    assert_eq!(state.retrieval_state(), RequestState::Failed);
    assert_eq!(state.results().plain_documents.len(), 1);
    assert!(state.notification().unwrap().is_error());
}

#[test]
fn message_uses_query_at_dispatch_time() {
    init_logging();
    let (state, _) = query_state(&["RBI"], &[]);
    let (state, _) = update(state, Msg::SourceToggled("RBI".into()));
    let (state, _) = update(state, Msg::SourceToggled("Income Tax".into()));
    let (state, _) = update(
        state,
        Msg::RetrievalFinished {
            seq: 1,
            result: Ok(RetrievalResult::Flat(Vec::new())),
        },
    );

    let text = state.notification().unwrap().text();
    assert!(text.contains("RBI"), "{text}");
    assert!(!text.contains("Income Tax"), "{text}");
}

#[test]
fn older_completion_does_not_overwrite_newer_action_banner() {
    init_logging();
    let mut state = AppState::new();
    state = update(state, Msg::SourceToggled("RBI".into())).0;
    let (state, scrape) = update(state, Msg::PersistClicked);
    let (state, retrieve) = update(state, Msg::QueryClicked);
    assert!(matches!(scrape[0], Effect::Scrape { seq: 1, .. }));
    assert!(matches!(retrieve[0], Effect::Retrieve { seq: 2, .. }));

    let (state, _) = update(
        state,
        Msg::RetrievalFinished {
            seq: 2,
            result: Ok(RetrievalResult::Flat(vec![plain("d1")])),
        },
    );
    let (state, effects) = update(
        state,
        Msg::ScrapeFinished {
            seq: 1,
            result: Ok(7),
        },
    );

    // Scrape bookkeeping still applies.
    assert_eq!(effects, vec![Effect::RefreshTotal]);
    assert_eq!(state.acquisition_state(), RequestState::Succeeded);
    let text = state.notification().unwrap().text();
    assert!(text.starts_with("Found 1 documents"), "{text}");
}

#[test]
fn older_completion_reports_while_newer_action_is_in_flight() {
    init_logging();
    let mut state = AppState::new();
    state = update(state, Msg::SourceToggled("RBI".into())).0;
    let (state, _) = update(state, Msg::PersistClicked);
    let (state, _) = update(state, Msg::QueryClicked);
    assert!(state.notification().is_none());

    let (state, _) = update(
        state,
        Msg::ScrapeFinished {
            seq: 1,
            result: Ok(7),
        },
    );
    assert_eq!(state.retrieval_state(), RequestState::InFlight);
    assert_eq!(
        state.notification(),
        Some(&Notification::Success(
            "Successfully scraped and saved 7 documents to the database".to_string()
        ))
    );

    let (state, _) = update(
        state,
        Msg::RetrievalFinished {
            seq: 2,
            result: Ok(RetrievalResult::Flat(vec![plain("d1")])),
        },
    );
    let text = state.notification().unwrap().text();
    assert!(text.starts_with("Found 1 documents"), "{text}");
}

#[test]
fn rejected_query_does_not_hide_running_scrape_outcome() {
    init_logging();
    let mut state = AppState::new();
    state = update(state, Msg::SourceToggled("RBI".into())).0;
    let (state, _) = update(state, Msg::PersistClicked);
    let state = update(state, Msg::SourceToggled("RBI".into())).0;
    let (state, effects) = update(state, Msg::QueryClicked);
    assert!(effects.is_empty());
    assert_eq!(
        state.notification(),
        Some(&Notification::Error(
            "Please select at least one source".to_string()
        ))
    );

    let (state, _) = update(
        state,
        Msg::ScrapeFinished {
            seq: 1,
            result: Err(RequestFailure::HttpStatus(500)),
        },
    );
    assert_eq!(state.acquisition_state(), RequestState::Failed);
    let notification = state.notification().unwrap();
    assert!(notification.is_error());
    assert!(notification.text().starts_with("Failed to scrape"), "{}", notification.text());
}

#[test]
fn mode_switch_is_ignored_while_retrieving() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::RetrievalModeChanged(RetrievalMode::Filter),
    );
    assert_eq!(state.retrieval_mode(), RetrievalMode::Filter);

    let state = update(state, Msg::SourceToggled("RBI".into())).0;
    let (state, effects) = update(state, Msg::QueryClicked);
    assert!(matches!(
        effects[0],
        Effect::Retrieve {
            mode: RetrievalMode::Filter,
            ..
        }
    ));
    let (state, _) = update(state, Msg::RetrievalModeChanged(RetrievalMode::Process));
    assert_eq!(state.retrieval_mode(), RetrievalMode::Filter);
}
