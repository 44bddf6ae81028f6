//! Govdocs core: pure selection/query/result state machine and view-model helpers.
mod catalog;
mod documents;
mod effect;
mod msg;
mod notification;
mod query;
mod selection;
mod state;
mod summary;
mod update;
mod view_model;

pub use catalog::{find_source, resolve_source, source_for_website, SourceInfo, SOURCE_CATALOG};
pub use documents::{
    PlainDocument, RequestFailure, ResultSet, RetrievalMode, RetrievalResult, Tile, TiledDocument,
    UnknownRetrievalMode,
};
pub use effect::Effect;
pub use msg::Msg;
pub use notification::{Notification, NotificationSlot};
pub use query::{build_filter_query, FilterQuery};
pub use selection::{SelectionError, SelectionStore};
pub use state::{AppState, RequestSeq, RequestState};
pub use summary::{summarize, ResultSummary};
pub use update::update;
pub use view_model::{AppViewModel, SourceRowView};
