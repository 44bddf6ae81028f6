use serde::{Deserialize, Serialize};

use crate::selection::{SelectionError, SelectionStore};

/// Body of `/documents/filter` and `/documents/process`.
///
/// `keywords` is `None` (serialized as `null`) when no phrase restriction
/// applies; it is never an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    pub sources: Vec<String>,
    pub keywords: Option<Vec<String>>,
}

impl FilterQuery {
    pub fn has_keywords(&self) -> bool {
        self.keywords.as_ref().is_some_and(|k| !k.is_empty())
    }
}

pub fn build_filter_query(selection: &SelectionStore) -> Result<FilterQuery, SelectionError> {
    if !selection.has_sources() {
        return Err(SelectionError::EmptySourceSelection);
    }
    let sources = selection
        .selected_sources()
        .into_iter()
        .map(ToOwned::to_owned)
        .collect();
    let keywords = match selection.keywords() {
        [] => None,
        entries => Some(entries.to_vec()),
    };
    Ok(FilterQuery { sources, keywords })
}
