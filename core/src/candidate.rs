//! Suggestion types produced by the dictionary.
//!
//! This module provides:
//! - `Suggestion`: a suggested word and the stage that produced it
//! - `SuggestionList`: capped, duplicate-free accumulator used while ranking

use serde::{Deserialize, Serialize};

/// Which ranking stage produced a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SuggestionSource {
    /// The typed prefix is itself a dictionary word
    Exact,
    /// A word found under the prefix in the trie
    Completion,
    /// A word within the edit-distance limit of the prefix
    Fuzzy { distance: usize },
}

/// A single suggested word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    pub source: SuggestionSource,
}

impl Suggestion {
    pub fn new<T: Into<String>>(text: T, source: SuggestionSource) -> Self {
        Suggestion {
            text: text.into(),
            source,
        }
    }
}

/// Ordered suggestion accumulator with a fixed capacity.
///
/// Entries keep their insertion order. A push is refused when the text is
/// already present or the list is full.
#[derive(Debug, Clone)]
pub struct SuggestionList {
    items: Vec<Suggestion>,
    cap: usize,
}

impl SuggestionList {
    /// Create an empty list holding at most `cap` entries.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            items: Vec::with_capacity(cap),
            cap,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.cap
    }

    pub fn contains(&self, text: &str) -> bool {
        self.items.iter().any(|s| s.text == text)
    }

    /// Append a suggestion.
    /// Returns true if it was added.
    pub fn push(&mut self, text: &str, source: SuggestionSource) -> bool {
        if self.is_full() || self.contains(text) {
            return false;
        }
        self.items.push(Suggestion::new(text, source));
        true
    }

    /// Get all suggestions.
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.items
    }

    pub fn into_texts(self) -> Vec<String> {
        self.items.into_iter().map(|s| s.text).collect()
    }

    pub fn into_suggestions(self) -> Vec<Suggestion> {
        self.items
    }
}
