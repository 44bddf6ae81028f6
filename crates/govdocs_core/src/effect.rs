use crate::{FilterQuery, RequestSeq, RetrievalMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// `GET /documents` for its `total` field.
    RefreshTotal,
    Scrape {
        seq: RequestSeq,
        sources: Vec<String>,
    },
    Retrieve {
        seq: RequestSeq,
        query: FilterQuery,
        mode: RetrievalMode,
    },
    ClearDatabase { seq: RequestSeq },
}
