use std::fmt;

use govdocs_core::{RequestSeq, RetrievalResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    TotalRefreshed(Result<u64, ClientError>),
    ScrapeCompleted {
        seq: RequestSeq,
        result: Result<u64, ClientError>,
    },
    RetrievalCompleted {
        seq: RequestSeq,
        result: Result<RetrievalResult, ClientError>,
    },
    ClearCompleted {
        seq: RequestSeq,
        result: Result<(), ClientError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ClientError {
    pub kind: FailureKind,
    pub message: String,
}

impl ClientError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    /// Request or response body was not the expected JSON.
    InvalidBody,
    /// Worker runtime could not be started.
    Runtime,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::InvalidBody => write!(f, "invalid body"),
            FailureKind::Runtime => write!(f, "runtime error"),
        }
    }
}
