//! wordpredict-core
//!
//! Word prediction for soft keyboards: a prefix trie over a loaded word list,
//! a composition buffer for the word being typed, and an edit-distance
//! fallback for typos.
//!
//! Public API:
//! - `TrieNode` - Ordered prefix tree over dictionary words
//! - `EditDistanceMatcher` - Levenshtein distance with a match threshold
//! - `WordComposer` - Typing buffer for the current word
//! - `Dictionary` - Word list loading and suggestion ranking
//! - `KeyboardSession` - Key handling glue between a keyboard and the engine
//! - `Config` - Ranking limits and feature flags
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod trie;
pub use trie::{TrieNode, Words};

pub mod fuzzy;
pub use fuzzy::EditDistanceMatcher;

pub mod composer;
pub use composer::WordComposer;

pub mod candidate;
pub use candidate::{Suggestion, SuggestionList, SuggestionSource};

pub mod dictionary;
pub use dictionary::{Dictionary, LoadHandle};

pub mod context;
pub use context::KeyboardContext;

pub mod session;
pub use session::{KeyEvent, KeyResult, KeyboardSession};

/// Engine configuration.
///
/// Every field has a default, so a TOML file only needs to name the values
/// it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of suggestions returned per query
    pub max_suggestions: usize,

    /// The fuzzy fallback runs only when exact and prefix matching produced
    /// fewer results than this
    pub fuzzy_trigger: usize,

    /// Largest edit distance accepted by the fuzzy fallback
    pub max_edit_distance: usize,

    /// Maximum number of entries in the prefix -> suggestions cache.
    /// Zero disables caching.
    pub max_cache_size: usize,

    /// Whether typed letters feed the composer at all
    pub prediction_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_suggestions: 5,
            fuzzy_trigger: 3,
            max_edit_distance: 2,
            max_cache_size: 256,
            prediction_enabled: true,
        }
    }
}

impl Config {
    /// Read a TOML config file. Missing keys take their defaults.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parse config {}", path.display()))
    }

    /// Write the config as pretty TOML.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).context("serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("write config {}", path.display()))
    }

    /// Parse an inline TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Matcher for the configured edit-distance limit.
    pub fn matcher(&self) -> EditDistanceMatcher {
        EditDistanceMatcher::new(self.max_edit_distance)
    }
}

/// Utility helpers.
pub mod utils {
    /// Dictionary form of a raw word-list entry: trimmed and lowercased.
    /// Returns `None` for entries that are empty after trimming.
    ///
    /// No Unicode normalization is applied, so a word comes back in the
    /// same code points it was loaded with.
    pub fn normalize_word(s: &str) -> Option<String> {
        let word = s.trim().to_lowercase();
        (!word.is_empty()).then_some(word)
    }

    /// Query form of a typed prefix: lowercase, no trimming.
    pub fn fold_prefix(s: &str) -> String {
        s.to_lowercase()
    }
}
