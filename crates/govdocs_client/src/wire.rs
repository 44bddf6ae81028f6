use govdocs_core::{PlainDocument, RetrievalResult, TiledDocument};
use serde::{Deserialize, Serialize};

use crate::{ClientError, FailureKind};

#[derive(Debug, Serialize)]
pub(crate) struct ScrapeBody<'a> {
    pub sources: &'a [String],
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScrapeReply {
    pub total: u64,
}

/// `GET /documents`; only the persisted total is used.
#[derive(Debug, Deserialize)]
pub(crate) struct DocumentsReply {
    pub total: u64,
}

/// The two retrieval shapes, told apart by the presence of `processed_documents`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RetrievalReply {
    Partitioned {
        processed_documents: Vec<TiledDocument>,
        #[serde(default)]
        regular_documents: Vec<PlainDocument>,
        #[serde(default)]
        total_tiles: Option<u64>,
    },
    Flat {
        documents: Vec<PlainDocument>,
    },
}

impl From<RetrievalReply> for RetrievalResult {
    fn from(reply: RetrievalReply) -> Self {
        match reply {
            RetrievalReply::Partitioned {
                processed_documents,
                regular_documents,
                total_tiles,
            } => RetrievalResult::Partitioned {
                tiled: processed_documents,
                plain: regular_documents,
                reported_tiles: total_tiles,
            },
            RetrievalReply::Flat { documents } => RetrievalResult::Flat(documents),
        }
    }
}

/// Decode a `/documents/filter` or `/documents/process` response body.
pub fn decode_retrieval(bytes: &[u8]) -> Result<RetrievalResult, ClientError> {
    serde_json::from_slice::<RetrievalReply>(bytes)
        .map(RetrievalResult::from)
        .map_err(|err| ClientError::new(FailureKind::InvalidBody, err.to_string()))
}

pub(crate) fn decode<T: for<'de> Deserialize<'de>>(bytes: &[u8]) -> Result<T, ClientError> {
    serde_json::from_slice(bytes)
        .map_err(|err| ClientError::new(FailureKind::InvalidBody, err.to_string()))
}

pub(crate) fn encode<T: Serialize>(body: &T) -> Result<Vec<u8>, ClientError> {
    serde_json::to_vec(body).map_err(|err| ClientError::new(FailureKind::InvalidBody, err.to_string()))
}
