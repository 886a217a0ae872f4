//! Correction dialog form state.

use ratify_core::{MessageId, ResolutionError};

/// State for the correction dialog form.
#[derive(Debug, Clone, Default)]
pub struct CorrectionState {
    /// Item the form was opened for.
    pub for_item: Option<MessageId>,
    /// Label typed so far.
    pub input: String,
    /// Error from the last confirm attempt.
    pub error: Option<String>,
}

impl CorrectionState {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepares the form for an item.
    ///
    /// Reopening for the same item keeps what was typed.
    pub fn open(&mut self, id: &MessageId) {
        if self.for_item.as_ref() != Some(id) {
            self.for_item = Some(id.clone());
            self.input.clear();
        }
        self.error = None;
    }

    /// Updates the typed label and clears any stale error.
    pub fn set_input(&mut self, input: String) {
        self.input = input;
        self.error = None;
    }

    /// Records a refused confirm.
    pub fn reject(&mut self, error: &ResolutionError) {
        self.error = Some(error.to_string());
    }

    /// Clears the form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reopen_same_item_keeps_input() {
        let mut state = CorrectionState::new();
        let id = MessageId::new("a");
        state.open(&id);
        state.set_input("Shop".into());

        state.open(&id);

        assert_eq!(state.input, "Shop");
    }

    #[test]
    fn test_open_other_item_clears_input() {
        let mut state = CorrectionState::new();
        state.open(&MessageId::new("a"));
        state.set_input("Shop".into());

        state.open(&MessageId::new("b"));

        assert!(state.input.is_empty());
        assert_eq!(state.for_item, Some(MessageId::new("b")));
    }

    #[test]
    fn test_typing_clears_error() {
        let mut state = CorrectionState::new();
        state.reject(&ResolutionError::BlankLabel);
        assert!(state.error.is_some());

        state.set_input("S".into());

        assert!(state.error.is_none());
    }
}
