use govdocs_logging::{govdocs_debug, govdocs_warn};

use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => vec![Effect::RefreshTotal],
        Msg::SourceToggled(id) => {
            if state.selection_mut().toggle_source(&id) {
                state.mark_dirty();
            } else {
                govdocs_warn!("Ignoring toggle of unknown source {:?}", id);
            }
            Vec::new()
        }
        Msg::AllSourcesSelected => {
            state.selection_mut().select_all_sources();
            state.mark_dirty();
            Vec::new()
        }
        Msg::SourcesCleared => {
            state.selection_mut().clear_sources();
            state.mark_dirty();
            Vec::new()
        }
        Msg::KeywordInputChanged(text) => {
            if state.selection().keyword_input() != text {
                state.selection_mut().set_keyword_input(text);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::KeywordSubmitted => {
            if state.selection_mut().submit_keyword_input() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::KeywordAdded(text) => {
            if state.selection_mut().add_keyword(&text) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::KeywordRemoved { index } => {
            match state.selection_mut().remove_keyword(index) {
                Ok(removed) => {
                    govdocs_debug!("Removed keyword {:?} at {}", removed, index);
                    state.mark_dirty();
                }
                Err(err) => govdocs_warn!("Keyword removal rejected: {}", err),
            }
            Vec::new()
        }
        Msg::KeywordsCleared => {
            if !state.selection().keywords().is_empty() {
                state.selection_mut().clear_keywords();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::RetrievalModeChanged(mode) => {
            if !state.set_retrieval_mode(mode) {
                govdocs_debug!("Retrieval mode change to {} ignored", mode);
            }
            Vec::new()
        }
        Msg::PersistClicked => state.start_acquisition().into_iter().collect(),
        Msg::QueryClicked => state.start_retrieval().into_iter().collect(),
        Msg::ClearDatabaseRequested => {
            state.request_clear();
            Vec::new()
        }
        Msg::ClearDatabaseConfirmed => state.confirm_clear().into_iter().collect(),
        Msg::ClearDatabaseCancelled => {
            state.cancel_clear();
            Vec::new()
        }
        Msg::ScrapeFinished { seq, result } => state.finish_acquisition(seq, result),
        Msg::RetrievalFinished { seq, result } => {
            state.finish_retrieval(seq, result);
            Vec::new()
        }
        Msg::TotalRefreshed { result } => {
            state.apply_total(result);
            Vec::new()
        }
        Msg::ClearFinished { seq, result } => {
            state.finish_clear(seq, result);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
