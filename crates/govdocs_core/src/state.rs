use govdocs_logging::{govdocs_info, govdocs_warn};

use crate::notification::{self, Notification, NotificationSlot};
use crate::summary::summarize;
use crate::view_model::{AppViewModel, SourceRowView};
use crate::{
    build_filter_query, Effect, FilterQuery, RequestFailure, ResultSet, RetrievalMode,
    RetrievalResult, SelectionStore, SOURCE_CATALOG,
};

/// Monotonic token attached to every dispatched request.
pub type RequestSeq = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    selection: SelectionStore,
    retrieval_mode: RetrievalMode,
    acquisition: RequestState,
    retrieval: RequestState,
    clear_pending_confirmation: bool,
    clearing: bool,
    notification: NotificationSlot,
    results: ResultSet,
    /// Query the current (or last) retrieval was issued with.
    last_query: Option<FilterQuery>,
    total_count: u64,
    last_scraped: Option<u64>,
    last_seq: RequestSeq,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_retrieval_mode(mode: RetrievalMode) -> Self {
        Self {
            retrieval_mode: mode,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        let sources = SOURCE_CATALOG
            .iter()
            .map(|source| SourceRowView {
                id: source.id.to_string(),
                display_name: source.display_name.to_string(),
                selected: self.selection.is_selected(source.id),
            })
            .collect();

        AppViewModel {
            sources,
            keywords: self.selection.keywords().to_vec(),
            keyword_input: self.selection.keyword_input().to_string(),
            retrieval_mode: self.retrieval_mode,
            acquisition: self.acquisition,
            retrieval: self.retrieval,
            persist_enabled: self.acquisition != RequestState::InFlight,
            query_enabled: self.retrieval != RequestState::InFlight,
            clear_enabled: !self.clearing,
            awaiting_clear_confirmation: self.clear_pending_confirmation,
            notification: self.notification.current().cloned(),
            total_count: self.total_count,
            last_scraped: self.last_scraped,
            summary: summarize(&self.results),
            tiled_documents: self.results.tiled_documents.clone(),
            plain_documents: self.results.plain_documents.clone(),
            dirty: self.dirty,
        }
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.current()
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn acquisition_state(&self) -> RequestState {
        self.acquisition
    }

    pub fn retrieval_state(&self) -> RequestState {
        self.retrieval
    }

    pub fn retrieval_mode(&self) -> RetrievalMode {
        self.retrieval_mode
    }

    pub fn is_clearing(&self) -> bool {
        self.clearing
    }

    /// Returns the dirty flag and resets it.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn selection_mut(&mut self) -> &mut SelectionStore {
        &mut self.selection
    }

    pub(crate) fn set_retrieval_mode(&mut self, mode: RetrievalMode) -> bool {
        if self.retrieval == RequestState::InFlight || self.retrieval_mode == mode {
            return false;
        }
        self.retrieval_mode = mode;
        self.dirty = true;
        true
    }

    /// Starts a user action: new sequence number, notification cleared.
    fn begin_action(&mut self) -> RequestSeq {
        self.last_seq += 1;
        self.notification.claim();
        self.dirty = true;
        self.last_seq
    }

    fn reject_without_sources(&mut self) {
        self.notification.show_local(Notification::Error(
            notification::NO_SOURCE_SELECTED.to_string(),
        ));
        self.dirty = true;
    }

    pub(crate) fn start_acquisition(&mut self) -> Option<Effect> {
        if self.acquisition == RequestState::InFlight {
            return None;
        }
        if !self.selection.has_sources() {
            self.reject_without_sources();
            return None;
        }
        let sources = self
            .selection
            .selected_sources()
            .into_iter()
            .map(ToOwned::to_owned)
            .collect();
        let seq = self.begin_action();
        self.acquisition = RequestState::InFlight;
        Some(Effect::Scrape { seq, sources })
    }

    pub(crate) fn finish_acquisition(
        &mut self,
        seq: RequestSeq,
        result: Result<u64, RequestFailure>,
    ) -> Vec<Effect> {
        self.dirty = true;
        match result {
            Ok(count) => {
                govdocs_info!("Scrape #{} persisted {} documents", seq, count);
                self.acquisition = RequestState::Succeeded;
                self.last_scraped = Some(count);
                self.notification
                    .post(seq, notification::scrape_succeeded(count));
                vec![Effect::RefreshTotal]
            }
            Err(failure) => {
                govdocs_warn!("Scrape #{} failed: {}", seq, failure);
                self.acquisition = RequestState::Failed;
                self.notification.post(seq, notification::scrape_failed());
                Vec::new()
            }
        }
    }

    pub(crate) fn start_retrieval(&mut self) -> Option<Effect> {
        if self.retrieval == RequestState::InFlight {
            return None;
        }
        let query = match build_filter_query(&self.selection) {
            Ok(query) => query,
            Err(_) => {
                self.reject_without_sources();
                return None;
            }
        };
        let seq = self.begin_action();
        self.retrieval = RequestState::InFlight;
        self.last_query = Some(query.clone());
        Some(Effect::Retrieve {
            seq,
            query,
            mode: self.retrieval_mode,
        })
    }

    pub(crate) fn finish_retrieval(
        &mut self,
        seq: RequestSeq,
        result: Result<RetrievalResult, RequestFailure>,
    ) {
        self.dirty = true;
        let retrieved = match result {
            Ok(retrieved) => retrieved,
            Err(failure) => {
                govdocs_warn!("Retrieval #{} failed: {}", seq, failure);
                self.retrieval = RequestState::Failed;
                self.notification.post(seq, notification::retrieval_failed());
                return;
            }
        };

        let reported_tiles = retrieved.reported_tiles();
        self.results = retrieved.into_result_set();
        self.retrieval = RequestState::Succeeded;

        let summary = summarize(&self.results);
        if let Some(reported) = reported_tiles {
            if reported != summary.aggregate_tile_count as u64 {
                govdocs_warn!(
                    "Retrieval #{}: service reported {} tiles, counted {}",
                    seq,
                    reported,
                    summary.aggregate_tile_count
                );
            }
        }

        let query = self.last_query.clone().unwrap_or(FilterQuery {
            sources: Vec::new(),
            keywords: None,
        });
        let message = if summary.total_docs == 0 {
            notification::nothing_found(&query)
        } else {
            notification::retrieval_succeeded(&query, &summary)
        };
        self.notification.post(seq, message);
    }

    pub(crate) fn apply_total(&mut self, result: Result<u64, RequestFailure>) {
        match result {
            Ok(total) => {
                if self.total_count != total {
                    self.total_count = total;
                    self.dirty = true;
                }
            }
            Err(failure) => {
                govdocs_warn!("Total count refresh failed: {}", failure);
            }
        }
    }

    pub(crate) fn request_clear(&mut self) -> bool {
        if self.clearing || self.clear_pending_confirmation {
            return false;
        }
        self.clear_pending_confirmation = true;
        self.dirty = true;
        true
    }

    pub(crate) fn cancel_clear(&mut self) -> bool {
        if !self.clear_pending_confirmation {
            return false;
        }
        self.clear_pending_confirmation = false;
        self.dirty = true;
        true
    }

    pub(crate) fn confirm_clear(&mut self) -> Option<Effect> {
        if !self.clear_pending_confirmation || self.clearing {
            return None;
        }
        self.clear_pending_confirmation = false;
        self.clearing = true;
        let seq = self.begin_action();
        Some(Effect::ClearDatabase { seq })
    }

    pub(crate) fn finish_clear(&mut self, seq: RequestSeq, result: Result<(), RequestFailure>) {
        self.clearing = false;
        self.dirty = true;
        match result {
            Ok(()) => {
                govdocs_info!("Clear #{} succeeded", seq);
                self.results = ResultSet::default();
                self.total_count = 0;
                self.notification.post(seq, notification::database_cleared());
            }
            Err(failure) => {
                govdocs_warn!("Clear #{} failed: {}", seq, failure);
                self.notification.post(seq, notification::clear_failed());
            }
        }
    }
}
