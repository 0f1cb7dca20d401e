//! Composition buffer for the word currently being typed.
//!
//! The composer stores the characters typed since the last commit together
//! with the alternate key codes the keyboard reported for each of them. The
//! codes are kept index-for-index with the characters so callers that want
//! nearby-key correction can consult them; the engine itself only reads the
//! characters.

/// Per-word typing buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordComposer {
    chars: Vec<char>,
    codes: Vec<Vec<u32>>,
}

impl WordComposer {
    /// Create a new empty composer.
    pub fn new() -> Self {
        Self {
            chars: Vec::new(),
            codes: Vec::new(),
        }
    }

    /// Append a character and the alternate key codes offered for it.
    ///
    /// No character-class check is done here; the caller decides what counts
    /// as part of a word.
    pub fn append(&mut self, ch: char, alternates: impl Into<Vec<u32>>) {
        self.chars.push(ch);
        self.codes.push(alternates.into());
    }

    /// Remove the last character and its alternates (backspace).
    /// Returns true if a character was removed.
    pub fn delete_last(&mut self) -> bool {
        if self.chars.pop().is_none() {
            return false;
        }
        self.codes.pop();
        true
    }

    /// Clear the buffer.
    pub fn reset(&mut self) {
        self.chars.clear();
        self.codes.clear();
    }

    /// The composed word so far; empty when nothing is buffered.
    pub fn current_word(&self) -> String {
        self.chars.iter().collect()
    }

    /// Number of buffered characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Alternate key codes recorded for the character at `index`.
    pub fn codes_at(&self, index: usize) -> Option<&[u32]> {
        self.codes.get(index).map(Vec::as_slice)
    }
}
