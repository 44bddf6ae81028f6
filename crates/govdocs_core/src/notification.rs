use crate::query::FilterQuery;
use crate::state::RequestSeq;
use crate::summary::ResultSummary;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

impl Notification {
    pub fn text(&self) -> &str {
        match self {
            Notification::Success(text) | Notification::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notification::Error(_))
    }
}

/// Single success/error banner shared by all actions.
///
/// Completions carry the sequence number their action was started with. A
/// completion is dropped only when a newer action has already reported its
/// own outcome; an older request finishing while a newer one is still in
/// flight does report. Local validation messages carry no sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationSlot {
    current: Option<Notification>,
    /// Newest action whose outcome has been posted.
    reported: RequestSeq,
}

impl NotificationSlot {
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Clears the banner when a new action starts.
    pub fn claim(&mut self) {
        self.current = None;
    }

    /// Posts the outcome of action `seq`. Returns whether it was shown.
    pub fn post(&mut self, seq: RequestSeq, notification: Notification) -> bool {
        if seq < self.reported {
            return false;
        }
        self.reported = seq;
        self.current = Some(notification);
        true
    }

    /// Shows a message that belongs to no request.
    pub fn show_local(&mut self, notification: Notification) {
        self.current = Some(notification);
    }
}

pub(crate) const NO_SOURCE_SELECTED: &str = "Please select at least one source";

pub(crate) fn scrape_succeeded(count: u64) -> Notification {
    Notification::Success(format!(
        "Successfully scraped and saved {count} documents to the database"
    ))
}

pub(crate) fn scrape_failed() -> Notification {
    Notification::Error(
        "Failed to scrape documents. Make sure the backend service and MongoDB are running."
            .to_string(),
    )
}

pub(crate) fn retrieval_failed() -> Notification {
    Notification::Error(
        "Failed to fetch documents from the database. Make sure MongoDB is running.".to_string(),
    )
}

pub(crate) fn nothing_found(query: &FilterQuery) -> Notification {
    Notification::Error(format!(
        "No documents found for {}{}. Try persisting documents first or adjusting your keywords.",
        query.sources.join(", "),
        keyword_clause(query),
    ))
}

pub(crate) fn retrieval_succeeded(query: &FilterQuery, summary: &ResultSummary) -> Notification {
    let mut text = format!(
        "Found {} documents from {}{}",
        summary.total_docs,
        query.sources.join(", "),
        keyword_clause(query),
    );
    if summary.tiled_count > 0 {
        text.push_str(&format!(
            ". {} AI-analyzed document(s) with {} tiles, {} regular document(s)",
            summary.tiled_count, summary.aggregate_tile_count, summary.plain_count
        ));
    }
    Notification::Success(text)
}

pub(crate) fn database_cleared() -> Notification {
    Notification::Success("Database cleared successfully".to_string())
}

pub(crate) fn clear_failed() -> Notification {
    Notification::Error(
        "Failed to clear the database. Make sure the backend service and MongoDB are running."
            .to_string(),
    )
}

fn keyword_clause(query: &FilterQuery) -> String {
    if !query.has_keywords() {
        return String::new();
    }
    let quoted: Vec<String> = query
        .keywords
        .iter()
        .flatten()
        .map(|k| format!("\"{k}\""))
        .collect();
    format!(" matching keywords: {}", quoted.join(", "))
}
