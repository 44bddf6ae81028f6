use std::sync::mpsc;

use govdocs_client::{ClientCommand, ClientError, ClientEvent, ClientHandle, EventSink, FailureKind};
use govdocs_core::{Effect, Msg, RequestFailure};
use govdocs_logging::{govdocs_info, govdocs_warn};

use super::app::AppEvent;

pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(client: ClientHandle) -> Self {
        Self { client }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            let command = match effect {
                Effect::RefreshTotal => ClientCommand::RefreshTotal,
                Effect::Scrape { seq, sources } => {
                    govdocs_info!("Scrape #{} sources={:?}", seq, sources);
                    ClientCommand::Scrape { seq, sources }
                }
                Effect::Retrieve { seq, query, mode } => {
                    govdocs_info!(
                        "Retrieve #{} mode={} sources={:?} keywords={:?}",
                        seq,
                        mode,
                        query.sources,
                        query.keywords
                    );
                    ClientCommand::Retrieve { seq, query, mode }
                }
                Effect::ClearDatabase { seq } => {
                    govdocs_info!("ClearDatabase #{}", seq);
                    ClientCommand::Clear { seq }
                }
            };
            self.client.submit(command);
        }
    }
}

/// Feeds client completions back into the app loop as core messages.
pub struct MsgSink {
    tx: mpsc::Sender<AppEvent>,
}

impl MsgSink {
    pub fn new(tx: mpsc::Sender<AppEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for MsgSink {
    fn emit(&self, event: ClientEvent) {
        let _ = self.tx.send(AppEvent::Core(map_event(event)));
    }
}

fn map_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::TotalRefreshed(result) => Msg::TotalRefreshed {
            result: result.map_err(|err| map_failure("total refresh", &err)),
        },
        ClientEvent::ScrapeCompleted { seq, result } => Msg::ScrapeFinished {
            seq,
            result: result.map_err(|err| map_failure("scrape", &err)),
        },
        ClientEvent::RetrievalCompleted { seq, result } => Msg::RetrievalFinished {
            seq,
            result: result.map_err(|err| map_failure("retrieval", &err)),
        },
        ClientEvent::ClearCompleted { seq, result } => Msg::ClearFinished {
            seq,
            result: result.map_err(|err| map_failure("clear", &err)),
        },
    }
}

fn map_failure(operation: &str, err: &ClientError) -> RequestFailure {
    govdocs_warn!("{} failed: {}", operation, err);
    match err.kind {
        FailureKind::HttpStatus(code) => RequestFailure::HttpStatus(code),
        FailureKind::InvalidBody => RequestFailure::InvalidResponse,
        FailureKind::InvalidUrl
        | FailureKind::Timeout
        | FailureKind::Network
        | FailureKind::Runtime => RequestFailure::Transport,
    }
}
