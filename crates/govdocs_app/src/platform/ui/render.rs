use std::fmt::Write as _;

use govdocs_core::{
    source_for_website, AppViewModel, Notification, PlainDocument, RequestState, TiledDocument,
    SOURCE_CATALOG,
};

const DESCRIPTION_PREVIEW_CHARS: usize = 200;
/// Plain documents listed under the status block; `show` lists all.
const STATUS_PREVIEW_DOCS: usize = 5;

pub const HELP: &str = "\
Commands:
  sources              list available sources
  toggle <source>      select/deselect a source (id, name or domain)
  all | none           select every source / clear the selection
  kw <phrase>          add a keyword phrase
  rm <n>               remove keyword number n
  kwclear              remove all keywords
  mode filter|process  choose plain filtering or AI-analyzed retrieval
  persist              scrape the selected sources and save to the database
  query                fetch saved documents for the selection
  clear                delete every saved document (asks for confirmation)
  show                 list all retrieved documents
  status               redraw the status block
  help                 this text
  quit                 exit";

pub fn render_status(view: &AppViewModel, timestamp: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "[{timestamp}] Documents in database: {}",
        view.total_count
    );

    let sources: Vec<String> = view
        .sources
        .iter()
        .map(|row| format!("[{}] {}", if row.selected { 'x' } else { ' ' }, row.id))
        .collect();
    let _ = writeln!(out, "Sources:  {}", sources.join("  "));

    if view.keywords.is_empty() {
        let _ = writeln!(out, "Keywords: (none)");
    } else {
        let keywords: Vec<String> = view
            .keywords
            .iter()
            .enumerate()
            .map(|(i, k)| format!("{}. \"{}\"", i + 1, k))
            .collect();
        let _ = writeln!(out, "Keywords: {}", keywords.join("  "));
    }

    let _ = writeln!(
        out,
        "Mode: {} | Scrape: {} | Query: {}{}",
        view.retrieval_mode,
        state_label(view.acquisition),
        state_label(view.retrieval),
        if view.clear_enabled { "" } else { " | Clearing..." },
    );

    if view.awaiting_clear_confirmation {
        let _ = writeln!(
            out,
            "!! This deletes ALL saved documents. Type `yes` to confirm, anything else cancels."
        );
    }

    match &view.notification {
        Some(Notification::Success(text)) => {
            let _ = writeln!(out, "OK: {text}");
        }
        Some(Notification::Error(text)) => {
            let _ = writeln!(out, "ERROR: {text}");
        }
        None => {}
    }

    let summary = &view.summary;
    if summary.total_docs > 0 {
        let _ = writeln!(
            out,
            "Results: {} documents ({} AI-analyzed with {} tiles, {} regular)",
            summary.total_docs,
            summary.tiled_count,
            summary.aggregate_tile_count,
            summary.plain_count
        );
        for doc in &view.tiled_documents {
            let _ = writeln!(
                out,
                "  * {} [{} tiles]",
                doc.original_title,
                doc.tiles.len()
            );
        }
        for doc in view.plain_documents.iter().take(STATUS_PREVIEW_DOCS) {
            let _ = writeln!(out, "  - {}", doc.title);
        }
        let hidden = view.plain_documents.len().saturating_sub(STATUS_PREVIEW_DOCS);
        if hidden > 0 {
            let _ = writeln!(out, "  ... {hidden} more (`show` lists all)");
        }
    }
    out
}

fn state_label(state: RequestState) -> &'static str {
    match state {
        RequestState::Idle => "idle",
        RequestState::InFlight => "running...",
        RequestState::Succeeded => "done",
        RequestState::Failed => "failed",
    }
}

pub fn render_sources() -> String {
    let mut out = String::new();
    for source in SOURCE_CATALOG {
        let _ = writeln!(
            out,
            "  {:<12} {} ({})",
            source.id, source.display_name, source.website
        );
    }
    out
}

pub fn render_documents(view: &AppViewModel) -> String {
    if view.tiled_documents.is_empty() && view.plain_documents.is_empty() {
        return "No documents retrieved yet. Select sources and run `query`.\n".to_string();
    }
    let mut out = String::new();
    if !view.tiled_documents.is_empty() {
        let _ = writeln!(out, "== AI-analyzed documents ==");
        for doc in &view.tiled_documents {
            render_tiled(&mut out, doc);
        }
    }
    if !view.plain_documents.is_empty() {
        let _ = writeln!(out, "== Documents ==");
        for doc in &view.plain_documents {
            render_plain(&mut out, doc);
        }
    }
    out
}

fn render_tiled(out: &mut String, doc: &TiledDocument) {
    let _ = writeln!(out, "{}", doc.original_title);
    let _ = writeln!(out, "  {}", origin_line(&doc.website, doc.date.as_deref()));
    let _ = writeln!(out, "  {}", doc.link);
    for (i, tile) in doc.tiles.iter().enumerate() {
        let _ = writeln!(out, "  [{}] {}", i + 1, tile.heading);
        for line in tile.description.lines() {
            let _ = writeln!(out, "      {line}");
        }
        if let Some(insights) = tile.csv_insights.as_deref().filter(|s| !s.trim().is_empty()) {
            let _ = writeln!(out, "      Insights: {insights}");
        }
    }
    out.push('\n');
}

fn render_plain(out: &mut String, doc: &PlainDocument) {
    let _ = writeln!(out, "{}", doc.title);
    let _ = writeln!(out, "  {}", origin_line(&doc.website, doc.date.as_deref()));
    let preview = doc
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(&doc.content);
    if !preview.trim().is_empty() {
        let _ = writeln!(out, "  {}", truncate_chars(preview, DESCRIPTION_PREVIEW_CHARS));
    }
    if doc.csv_data.is_some() {
        let _ = writeln!(out, "  (contains table data)");
    }
    let _ = writeln!(out, "  {}", doc.link);
    out.push('\n');
}

fn origin_line(website: &str, date: Option<&str>) -> String {
    let source = source_for_website(website)
        .map(|s| s.display_name)
        .unwrap_or(website);
    match date {
        Some(date) if !date.trim().is_empty() => format!("{source} | {date}"),
        _ => source.to_string(),
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    match flat.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &flat[..cut]),
        None => flat,
    }
}
