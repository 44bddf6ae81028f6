use crate::{
    Notification, PlainDocument, RequestState, ResultSummary, RetrievalMode, TiledDocument,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRowView {
    pub id: String,
    pub display_name: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub sources: Vec<SourceRowView>,
    pub keywords: Vec<String>,
    pub keyword_input: String,
    pub retrieval_mode: RetrievalMode,
    pub acquisition: RequestState,
    pub retrieval: RequestState,
    pub persist_enabled: bool,
    pub query_enabled: bool,
    pub clear_enabled: bool,
    pub awaiting_clear_confirmation: bool,
    pub notification: Option<Notification>,
    pub total_count: u64,
    /// Documents persisted by the most recent successful scrape.
    pub last_scraped: Option<u64>,
    pub summary: ResultSummary,
    pub tiled_documents: Vec<TiledDocument>,
    pub plain_documents: Vec<PlainDocument>,
    pub dirty: bool,
}
