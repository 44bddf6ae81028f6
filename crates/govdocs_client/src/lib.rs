//! Govdocs client: HTTP boundary to the scraping service and request execution.
mod handle;
mod service;
mod types;
mod wire;

pub use handle::{ChannelEventSink, ClientCommand, ClientHandle, EventSink};
pub use service::{
    ClientSettings, DocumentService, ReqwestDocumentService, DEFAULT_CONNECT_TIMEOUT,
    DEFAULT_DOCUMENTS_LIMIT, DEFAULT_FILTER_LIMIT,
};
pub use types::{ClientError, ClientEvent, FailureKind};
pub use wire::decode_retrieval;
