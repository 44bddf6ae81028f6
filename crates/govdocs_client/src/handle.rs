use std::sync::{mpsc, Arc};
use std::thread;

use govdocs_core::{FilterQuery, RequestSeq, RetrievalMode};
use govdocs_logging::{govdocs_debug, govdocs_info, govdocs_warn};

use crate::{
    ClientError, ClientEvent, ClientSettings, DocumentService, FailureKind,
    ReqwestDocumentService,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
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
    Clear { seq: RequestSeq },
}

/// Receives request completions from the worker thread.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: ClientEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<ClientEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<ClientEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: ClientEvent) {
        let _ = self.tx.send(event);
    }
}

/// Front door to the worker thread that owns the async runtime.
///
/// Commands run concurrently; each completion is reported to the sink once.
/// The worker exits when every clone of the handle has been dropped.
#[derive(Clone)]
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
}

impl ClientHandle {
    pub fn connect(settings: ClientSettings, sink: Arc<dyn EventSink>) -> Result<Self, ClientError> {
        let service = ReqwestDocumentService::new(settings)?;
        Self::spawn(Arc::new(service), sink)
    }

    pub fn spawn(
        service: Arc<dyn DocumentService>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, ClientError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ClientCommand>();
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|err| ClientError::new(FailureKind::Runtime, err.to_string()))?;

        thread::Builder::new()
            .name("govdocs-client".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let service = service.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        let event = handle_command(service.as_ref(), command).await;
                        sink.emit(event);
                    });
                }
                govdocs_info!("Client worker shutting down");
            })
            .map_err(|err| ClientError::new(FailureKind::Runtime, err.to_string()))?;

        Ok(Self { cmd_tx })
    }

    /// Returns false when the worker is gone and the command was dropped.
    pub fn submit(&self, command: ClientCommand) -> bool {
        govdocs_debug!("Submitting {:?}", command);
        match self.cmd_tx.send(command) {
            Ok(()) => true,
            Err(err) => {
                govdocs_warn!("Client worker unavailable, dropped {:?}", err.0);
                false
            }
        }
    }
}

async fn handle_command(service: &dyn DocumentService, command: ClientCommand) -> ClientEvent {
    match command {
        ClientCommand::RefreshTotal => ClientEvent::TotalRefreshed(service.total_documents().await),
        ClientCommand::Scrape { seq, sources } => ClientEvent::ScrapeCompleted {
            seq,
            result: service.scrape(&sources).await,
        },
        ClientCommand::Retrieve { seq, query, mode } => ClientEvent::RetrievalCompleted {
            seq,
            result: service.retrieve(&query, mode).await,
        },
        ClientCommand::Clear { seq } => ClientEvent::ClearCompleted {
            seq,
            result: service.clear_documents().await,
        },
    }
}
