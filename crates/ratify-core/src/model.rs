//! Domain models for the review queue.

use serde::{Deserialize, Serialize};

/// Texts longer than this many characters get a "show more" affordance.
pub const EXPAND_THRESHOLD: usize = 100;

/// Placeholder shown for every item, since the queue carries no timestamp.
const DEFAULT_DISPLAY_TIMESTAMP: &str = "Just now";

/// Opaque identifier assigned to a message by the review service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub String);

impl MessageId {
    /// Create a new message ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MessageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for MessageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The system's current guess at a message's classification.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InferredLabel {
    /// A concrete label, e.g. a merchant id.
    Known(String),
    /// Nothing was inferred.
    #[default]
    Unknown,
}

impl InferredLabel {
    /// Build a label from an optional wire value. Missing and blank values are `Unknown`.
    #[must_use]
    pub fn from_wire(value: Option<String>) -> Self {
        match value {
            Some(label) if !label.trim().is_empty() => Self::Known(label),
            _ => Self::Unknown,
        }
    }

    /// Text shown to the reviewer.
    #[must_use]
    pub fn display(&self) -> &str {
        match self {
            Self::Known(label) => label,
            Self::Unknown => "Unknown",
        }
    }

    /// Value sent when the inference is ratified as-is.
    #[must_use]
    pub fn confirmation_value(&self) -> &str {
        match self {
            Self::Known(label) => label,
            Self::Unknown => "",
        }
    }

    /// Check whether nothing was inferred.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// One message awaiting classification review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnverifiedItem {
    /// Identifier, unique within the queue.
    pub id: MessageId,
    /// Original message content.
    pub text: String,
    /// Inferred classification.
    pub inferred_label: InferredLabel,
    /// Presentation-only timestamp.
    pub display_timestamp: String,
}

impl UnverifiedItem {
    /// Create a new item.
    #[must_use]
    pub fn new(id: impl Into<MessageId>, text: impl Into<String>, inferred_label: InferredLabel) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            inferred_label,
            display_timestamp: DEFAULT_DISPLAY_TIMESTAMP.to_string(),
        }
    }

    /// Check whether the text is long enough to need an expand toggle.
    #[must_use]
    pub fn is_expandable(&self) -> bool {
        self.text.chars().count() > EXPAND_THRESHOLD
    }
}

/// Queue entry as returned by the review service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnverifiedMessage {
    /// Message identifier.
    pub id: String,
    /// Message text.
    pub txt: String,
    /// Inferred merchant id, absent when nothing was inferred.
    #[serde(default)]
    pub merchant_id: Option<String>,
}

impl From<UnverifiedMessage> for UnverifiedItem {
    fn from(message: UnverifiedMessage) -> Self {
        Self::new(
            message.id,
            message.txt,
            InferredLabel::from_wire(message.merchant_id),
        )
    }
}

/// How the reviewer arrived at the final label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The inferred label was ratified.
    Accepted,
    /// The reviewer supplied a replacement label.
    Corrected,
}

impl Decision {
    /// Lowercase name used in logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Corrected => "corrected",
        }
    }
}

/// A single label assignment to send to the review service.
///
/// Ratifying and correcting produce the same request shape; `decision` only
/// feeds logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    /// Item being resolved.
    pub id: MessageId,
    /// Final label.
    pub label: String,
    /// Whether the label was ratified or corrected.
    pub decision: Decision,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expandable_threshold() {
        let long = UnverifiedItem::new("a", "x".repeat(150), InferredLabel::Unknown);
        let short = UnverifiedItem::new("b", "x".repeat(50), InferredLabel::Unknown);
        let boundary = UnverifiedItem::new("c", "x".repeat(EXPAND_THRESHOLD), InferredLabel::Unknown);

        assert!(long.is_expandable());
        assert!(!short.is_expandable());
        assert!(!boundary.is_expandable());
    }

    #[test]
    fn test_expandable_counts_chars_not_bytes() {
        // 60 two-byte characters: 120 bytes but only 60 chars.
        let item = UnverifiedItem::new("a", "é".repeat(60), InferredLabel::Unknown);
        assert!(!item.is_expandable());
    }

    #[test]
    fn test_unknown_label_confirms_as_empty() {
        let label = InferredLabel::from_wire(None);
        assert!(label.is_unknown());
        assert_eq!(label.display(), "Unknown");
        assert_eq!(label.confirmation_value(), "");

        assert_eq!(InferredLabel::from_wire(Some("  ".into())), InferredLabel::Unknown);
    }

    #[test]
    fn test_known_label() {
        let label = InferredLabel::from_wire(Some("Shop X".into()));
        assert_eq!(label.display(), "Shop X");
        assert_eq!(label.confirmation_value(), "Shop X");
    }

    #[test]
    fn test_message_deserializes_without_merchant() {
        let json = r#"[{"id":"a","txt":"hello","merchant_id":"Shop X"},{"id":"b","txt":"bye"}]"#;
        let messages: Vec<UnverifiedMessage> = serde_json::from_str(json).unwrap();
        let items: Vec<UnverifiedItem> = messages.into_iter().map(Into::into).collect();

        assert_eq!(items[0].id, MessageId::new("a"));
        assert_eq!(items[0].inferred_label, InferredLabel::Known("Shop X".into()));
        assert_eq!(items[1].inferred_label, InferredLabel::Unknown);
        assert_eq!(items[1].display_timestamp, "Just now");
    }
}
