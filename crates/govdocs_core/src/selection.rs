use std::collections::HashSet;

use thiserror::Error;

use crate::catalog::{find_source, SOURCE_CATALOG};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("keyword index {index} out of range (have {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("at least one source must be selected")]
    EmptySourceSelection,
}

/// Chosen sources plus the ordered keyword phrases and the pending keyword input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionStore {
    sources: HashSet<&'static str>,
    keywords: Vec<String>,
    keyword_input: String,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id`. Returns `false` (and changes nothing) when
    /// `id` is not a catalog source.
    pub fn toggle_source(&mut self, id: &str) -> bool {
        let Some(source) = find_source(id) else {
            return false;
        };
        if !self.sources.remove(source.id) {
            self.sources.insert(source.id);
        }
        true
    }

    pub fn select_all_sources(&mut self) {
        self.sources.extend(SOURCE_CATALOG.iter().map(|source| source.id));
    }

    pub fn clear_sources(&mut self) {
        self.sources.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.sources.contains(id)
    }

    pub fn has_sources(&self) -> bool {
        !self.sources.is_empty()
    }

    /// Selected ids in catalog order.
    pub fn selected_sources(&self) -> Vec<&'static str> {
        SOURCE_CATALOG
            .iter()
            .map(|source| source.id)
            .filter(|id| self.sources.contains(id))
            .collect()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn keyword_input(&self) -> &str {
        &self.keyword_input
    }

    pub fn set_keyword_input(&mut self, text: impl Into<String>) {
        self.keyword_input = text.into();
    }

    /// Appends the trimmed phrase and clears the pending input.
    /// Empty or whitespace-only text is ignored; returns whether an entry was added.
    pub fn add_keyword(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.keywords.push(trimmed.to_string());
        self.keyword_input.clear();
        true
    }

    /// Equivalent of pressing Enter in the keyword box.
    pub fn submit_keyword_input(&mut self) -> bool {
        let pending = std::mem::take(&mut self.keyword_input);
        let added = self.add_keyword(&pending);
        if !added {
            self.keyword_input = pending;
        }
        added
    }

    pub fn remove_keyword(&mut self, index: usize) -> Result<String, SelectionError> {
        if index >= self.keywords.len() {
            return Err(SelectionError::IndexOutOfRange {
                index,
                len: self.keywords.len(),
            });
        }
        Ok(self.keywords.remove(index))
    }

    pub fn clear_keywords(&mut self) {
        self.keywords.clear();
    }
}
