//! Keyboard session: key handling on top of the dictionary.
//!
//! The `KeyboardSession` owns the composer for the word being typed and
//! drives the dictionary on each key. It never touches the text field
//! itself; every edit is described in the `KeyboardContext` for the host to
//! apply.

use std::sync::Arc;

use tracing::trace;

use crate::composer::WordComposer;
use crate::context::KeyboardContext;
use crate::dictionary::Dictionary;

/// Key events a session understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// A printable character with the alternate key codes the keyboard
    /// offered for it
    Char(char, Vec<u32>),
    /// Backspace key
    Backspace,
    /// Any other key (shift, mode switch, enter, ...)
    Other,
}

impl KeyEvent {
    /// Character key without alternates.
    pub fn char(ch: char) -> Self {
        KeyEvent::Char(ch, Vec::new())
    }
}

/// Result of processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// The session produced an edit or changed the suggestions
    Handled,
    /// The key is not the session's business
    NotHandled,
}

/// Per-input-field typing session.
#[derive(Debug)]
pub struct KeyboardSession {
    dictionary: Arc<Dictionary>,
    composer: WordComposer,
    context: KeyboardContext,
    prediction_enabled: bool,
}

impl KeyboardSession {
    /// Create a session over a shared dictionary. Prediction starts as the
    /// dictionary's configuration says.
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        let prediction_enabled = dictionary.config().prediction_enabled;
        Self {
            dictionary,
            composer: WordComposer::new(),
            context: KeyboardContext::new(),
            prediction_enabled,
        }
    }

    pub fn context(&self) -> &KeyboardContext {
        &self.context
    }

    pub fn composer(&self) -> &WordComposer {
        &self.composer
    }

    pub fn prediction_enabled(&self) -> bool {
        self.prediction_enabled
    }

    /// Turn prediction on or off. Turning it off drops the current word and
    /// suggestions.
    pub fn set_prediction_enabled(&mut self, enabled: bool) {
        self.prediction_enabled = enabled;
        if !enabled {
            self.composer.reset();
            self.context.suggestions.clear();
        }
    }

    /// Forget the current word (e.g. the cursor moved or the field changed).
    pub fn reset(&mut self) {
        self.composer.reset();
        self.context = KeyboardContext::new();
    }

    /// Process a key event and update the context.
    ///
    /// The pending edit from the previous call is cleared first.
    pub fn process_key(&mut self, key: KeyEvent) -> KeyResult {
        self.context.clear_edit();

        match key {
            KeyEvent::Char(ch, alternates) => {
                self.context.commit_text.push(ch);
                if self.prediction_enabled && ch.is_alphabetic() {
                    self.composer.append(ch, alternates);
                    self.refresh_suggestions();
                } else {
                    // Anything else ends the word.
                    self.composer.reset();
                    self.context.suggestions.clear();
                }
                KeyResult::Handled
            }
            KeyEvent::Backspace => {
                self.context.delete_before = 1;
                if self.prediction_enabled {
                    self.composer.delete_last();
                    self.refresh_suggestions();
                }
                KeyResult::Handled
            }
            KeyEvent::Other => KeyResult::NotHandled,
        }
    }

    /// Accept the suggestion at `index` in the current strip.
    ///
    /// The context asks the host to delete the typed word and insert the
    /// suggestion; the composer and suggestions are cleared. Returns `None`
    /// (and changes nothing) for an out-of-range index.
    pub fn select_suggestion(&mut self, index: usize) -> Option<String> {
        let word = self.context.suggestions.get(index)?.clone();
        trace!(word = %word, replaced = self.composer.len(), "suggestion accepted");

        self.context.delete_before = self.composer.len();
        self.context.commit_text = word.clone();
        self.composer.reset();
        self.context.suggestions.clear();
        Some(word)
    }

    fn refresh_suggestions(&mut self) {
        self.context.suggestions = if self.composer.is_empty() {
            Vec::new()
        } else {
            self.dictionary.suggestions_for(&self.composer)
        };
    }
}
