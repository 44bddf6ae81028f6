use govdocs_core::{resolve_source, Msg, RetrievalMode};

/// What a line typed at the prompt asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Dispatch(Vec<Msg>),
    Help,
    ListSources,
    ShowDocuments,
    Status,
    Quit,
    Invalid(String),
    Empty,
}

/// Parses one prompt line. While a clear is awaiting confirmation, `yes`
/// confirms and any other input cancels.
pub fn parse_line(line: &str, awaiting_clear_confirmation: bool) -> InputAction {
    let line = line.trim();
    if awaiting_clear_confirmation {
        return match line.to_ascii_lowercase().as_str() {
            "y" | "yes" => InputAction::Dispatch(vec![Msg::ClearDatabaseConfirmed]),
            _ => InputAction::Dispatch(vec![Msg::ClearDatabaseCancelled]),
        };
    }
    if line.is_empty() {
        return InputAction::Empty;
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command.to_ascii_lowercase().as_str() {
        "help" | "?" => InputAction::Help,
        "sources" => InputAction::ListSources,
        "show" => InputAction::ShowDocuments,
        "status" => InputAction::Status,
        "quit" | "exit" => InputAction::Quit,
        "toggle" | "t" => match resolve_source(rest) {
            Some(source) => {
                InputAction::Dispatch(vec![Msg::SourceToggled(source.id.to_string())])
            }
            None if rest.is_empty() => InputAction::Invalid("usage: toggle <source>".into()),
            None => InputAction::Invalid(format!("unknown source `{rest}` (see `sources`)")),
        },
        "all" => InputAction::Dispatch(vec![Msg::AllSourcesSelected]),
        "none" => InputAction::Dispatch(vec![Msg::SourcesCleared]),
        // Typing into the keyword box, then pressing Enter.
        "kw" | "keyword" => InputAction::Dispatch(vec![
            Msg::KeywordInputChanged(rest.to_string()),
            Msg::KeywordSubmitted,
        ]),
        "rm" | "remove" => match rest.parse::<usize>() {
            Ok(position) if position >= 1 => {
                InputAction::Dispatch(vec![Msg::KeywordRemoved {
                    index: position - 1,
                }])
            }
            _ => InputAction::Invalid("usage: rm <keyword number, starting at 1>".into()),
        },
        "kwclear" => InputAction::Dispatch(vec![Msg::KeywordsCleared]),
        "mode" => match rest.parse::<RetrievalMode>() {
            Ok(mode) => InputAction::Dispatch(vec![Msg::RetrievalModeChanged(mode)]),
            Err(err) => InputAction::Invalid(err.to_string()),
        },
        "persist" | "scrape" => InputAction::Dispatch(vec![Msg::PersistClicked]),
        "query" | "search" => InputAction::Dispatch(vec![Msg::QueryClicked]),
        "clear" => InputAction::Dispatch(vec![Msg::ClearDatabaseRequested]),
        other => InputAction::Invalid(format!("unknown command `{other}` (try `help`)")),
    }
}
