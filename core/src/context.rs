//! Keyboard context for host communication.
//!
//! The `KeyboardContext` struct is a plain data container. After each call
//! into a `KeyboardSession`, the host reads these fields to edit the text
//! field and refresh the suggestion strip.

/// Edits and display state for the host to apply.
///
/// # Fields
///
/// - `delete_before`: characters to delete immediately before the cursor
/// - `commit_text`: text to insert at the cursor after the deletion
/// - `suggestions`: words to show in the suggestion strip, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardContext {
    /// Number of characters to remove before the cursor
    pub delete_before: usize,

    /// Text to commit to the application
    pub commit_text: String,

    /// Suggestions to display
    pub suggestions: Vec<String>,
}

impl KeyboardContext {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the pending edit, keeping the suggestions.
    pub fn clear_edit(&mut self) {
        self.delete_before = 0;
        self.commit_text.clear();
    }

    /// Check if there is an edit for the host to apply.
    pub fn has_edit(&self) -> bool {
        self.delete_before > 0 || !self.commit_text.is_empty()
    }
}
