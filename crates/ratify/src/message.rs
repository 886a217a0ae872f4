//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use ratify_core::{ConfirmationRequest, MessageId, ReviewConfig, UnverifiedItem};

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Startup
    /// Configuration loaded from disk and environment.
    ConfigLoaded(Result<ReviewConfig, String>),
    /// Queue snapshot fetched from the review service.
    QueueLoaded(Result<Vec<UnverifiedItem>, String>),

    // Queue
    /// Expand or collapse a row's text.
    ToggleExpand(MessageId),
    /// Ratify the inferred label (✓).
    Accept(MessageId),
    /// Open the correction dialog (✕).
    RequestCorrection(MessageId),
    /// Correction dialog messages.
    Correction(CorrectionMessage),

    // Service answers
    /// A confirmation call returned.
    Confirmed {
        /// The request that was sent.
        request: ConfirmationRequest,
        /// What the service said.
        result: Result<(), String>,
    },
    /// The settle delay of a removal elapsed.
    RemovalSettled(MessageId),

    // Keyboard Events
    /// Keyboard shortcut pressed.
    KeyPressed(KeyboardAction),
    /// Key event with no binding.
    KeyIgnored,
}

/// Keyboard actions that can be triggered by shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Close the correction dialog (Escape).
    Cancel,
}

/// Messages for the correction dialog.
#[derive(Debug, Clone)]
pub enum CorrectionMessage {
    /// Label input changed.
    LabelChanged(String),
    /// Send the corrected label.
    Confirm,
    /// Close without resolving.
    Cancel,
}
