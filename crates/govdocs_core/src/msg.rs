use crate::{RequestFailure, RequestSeq, RetrievalMode, RetrievalResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// App finished starting; kicks off the initial total-count refresh.
    Started,
    /// User flipped a source checkbox.
    SourceToggled(String),
    AllSourcesSelected,
    SourcesCleared,
    /// User edited the keyword input box.
    KeywordInputChanged(String),
    /// User pressed Enter in the keyword input box.
    KeywordSubmitted,
    /// Add a phrase directly, bypassing the input box.
    KeywordAdded(String),
    KeywordRemoved { index: usize },
    KeywordsCleared,
    RetrievalModeChanged(RetrievalMode),
    /// User clicked "Scrape & persist".
    PersistClicked,
    /// User clicked "Query".
    QueryClicked,
    /// User clicked "Clear database"; arms the confirmation step.
    ClearDatabaseRequested,
    ClearDatabaseConfirmed,
    ClearDatabaseCancelled,
    /// Service reply to `/scrape`: number of newly persisted documents.
    ScrapeFinished {
        seq: RequestSeq,
        result: Result<u64, RequestFailure>,
    },
    RetrievalFinished {
        seq: RequestSeq,
        result: Result<RetrievalResult, RequestFailure>,
    },
    TotalRefreshed { result: Result<u64, RequestFailure> },
    ClearFinished {
        seq: RequestSeq,
        result: Result<(), RequestFailure>,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for unrecognized input.
    NoOp,
}
