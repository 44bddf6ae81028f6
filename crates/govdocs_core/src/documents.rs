use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A stored document rendered without AI tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainDocument {
    #[serde(default)]
    pub id: Option<String>,
    pub website: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub content: String,
    pub link: String,
    #[serde(default)]
    pub scraped_at: Option<String>,
    /// Table extracted from the source page, as CSV text.
    #[serde(default)]
    pub csv_data: Option<String>,
    #[serde(default)]
    pub table_index: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub heading: String,
    pub description: String,
    #[serde(default)]
    pub csv_insights: Option<String>,
}

/// A document the service analyzed into tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TiledDocument {
    #[serde(default)]
    pub id: Option<String>,
    pub website: String,
    pub original_title: String,
    #[serde(default)]
    pub date: Option<String>,
    pub link: String,
    #[serde(default)]
    pub tiles: Vec<Tile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultSet {
    pub tiled_documents: Vec<TiledDocument>,
    pub plain_documents: Vec<PlainDocument>,
}

impl ResultSet {
    pub fn is_empty(&self) -> bool {
        self.tiled_documents.is_empty() && self.plain_documents.is_empty()
    }
}

/// Retrieval payload as resolved at the service boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetrievalResult {
    /// Flat document list; every entry is a plain document.
    Flat(Vec<PlainDocument>),
    Partitioned {
        tiled: Vec<TiledDocument>,
        plain: Vec<PlainDocument>,
        /// Tile total as reported by the service, if it sent one.
        reported_tiles: Option<u64>,
    },
}

impl RetrievalResult {
    pub fn reported_tiles(&self) -> Option<u64> {
        match self {
            RetrievalResult::Flat(_) => None,
            RetrievalResult::Partitioned { reported_tiles, .. } => *reported_tiles,
        }
    }

    pub fn into_result_set(self) -> ResultSet {
        match self {
            RetrievalResult::Flat(documents) => ResultSet {
                tiled_documents: Vec::new(),
                plain_documents: documents,
            },
            RetrievalResult::Partitioned { tiled, plain, .. } => ResultSet {
                tiled_documents: tiled,
                plain_documents: plain,
            },
        }
    }
}

/// Which retrieval endpoint the Query action uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetrievalMode {
    /// `/documents/filter`: flat list, no AI analysis.
    Filter,
    /// `/documents/process`: tiled and regular documents.
    #[default]
    Process,
}

impl fmt::Display for RetrievalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetrievalMode::Filter => write!(f, "filter"),
            RetrievalMode::Process => write!(f, "process"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown retrieval mode `{0}` (expected `filter` or `process`)")]
pub struct UnknownRetrievalMode(pub String);

impl FromStr for RetrievalMode {
    type Err = UnknownRetrievalMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "filter" => Ok(RetrievalMode::Filter),
            "process" => Ok(RetrievalMode::Process),
            other => Err(UnknownRetrievalMode(other.to_string())),
        }
    }
}

/// Why a service request did not succeed, as seen by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFailure {
    HttpStatus(u16),
    Transport,
    InvalidResponse,
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestFailure::HttpStatus(code) => write!(f, "http status {code}"),
            RequestFailure::Transport => write!(f, "transport error"),
            RequestFailure::InvalidResponse => write!(f, "invalid response body"),
        }
    }
}
