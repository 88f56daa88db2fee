//! The message record produced by the transcript parser.
//!
//! A [`ParsedMessage`] is one header line of the transcript plus every
//! continuation line merged into it. Its `emojis` list is derived from the
//! body and is kept in sync on every mutation, so it always reflects a fresh
//! scan of the current body.
//!
//! # Examples
//!
//! ```
//! use chatstats::ParsedMessage;
//!
//! let msg = ParsedMessage::new("1/2/23 10:00:00 AM", "Alice", "Hi 😀");
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.emojis(), ["😀"]);
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatstats::ParsedMessage;
//!
//! let msg = ParsedMessage::new("1/2/23 10:00:00 AM", "Alice", "Hi 😀");
//! let json = serde_json::to_string(&msg)?;
//! let parsed: ParsedMessage = serde_json::from_str(&json)?;
//!
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::parsing::extract_emojis;

/// One message of an exported chat.
///
/// | Field | Description |
/// |-------|-------------|
/// | `timestamp` | Display form `"{date} {time}"`, exactly as exported (never resolved to an instant) |
/// | `sender` | Author name, trimmed, never empty for parsed messages |
/// | `body` | Message text; continuation lines are joined with `\n` |
/// | `emojis` | Emoji occurrences in `body`, in order, duplicates kept |
///
/// Deserialization ignores any incoming `emojis` value and rescans the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MessageRecord")]
pub struct ParsedMessage {
    timestamp: String,
    sender: String,
    body: String,
    emojis: Vec<String>,
}

/// Wire shape accepted when deserializing a [`ParsedMessage`].
#[derive(Deserialize)]
struct MessageRecord {
    timestamp: String,
    sender: String,
    #[serde(default)]
    body: String,
}

impl From<MessageRecord> for ParsedMessage {
    fn from(record: MessageRecord) -> Self {
        ParsedMessage::new(record.timestamp, record.sender, record.body)
    }
}

impl ParsedMessage {
    /// Creates a message and scans `body` for emojis.
    pub fn new(
        timestamp: impl Into<String>,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let body = body.into();
        let emojis = extract_emojis(&body);
        Self {
            timestamp: timestamp.into(),
            sender: sender.into(),
            body,
            emojis,
        }
    }

    /// Appends a continuation line to the body and rescans the whole body.
    pub(crate) fn append_line(&mut self, line: &str) {
        self.body.push('\n');
        self.body.push_str(line);
        self.emojis = extract_emojis(&self.body);
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the display timestamp (`"{date} {time}"`).
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the emojis found in the body, in occurrence order.
    pub fn emojis(&self) -> &[String] {
        &self.emojis
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Returns the number of physical lines in the body.
    pub fn line_count(&self) -> usize {
        self.body.split('\n').count()
    }

    /// Returns `true` if the body is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_scans_emojis() {
        let msg = ParsedMessage::new("15.01.24 10:30", "Bob", "🔥 hot 🔥");
        assert_eq!(msg.emojis(), ["🔥", "🔥"]);
        assert_eq!(msg.timestamp(), "15.01.24 10:30");
        assert_eq!(msg.body(), "🔥 hot 🔥");
    }

    #[test]
    fn test_append_line_rescans_entire_body() {
        let mut msg = ParsedMessage::new("t", "Alice", "first 😀");
        msg.append_line("second 🎉");
        msg.append_line("third 😀");

        assert_eq!(msg.body(), "first 😀\nsecond 🎉\nthird 😀");
        assert_eq!(msg.emojis(), ["😀", "🎉", "😀"]);
        assert_eq!(msg.line_count(), 3);
    }

    #[test]
    fn test_is_empty() {
        assert!(ParsedMessage::new("t", "Alice", "").is_empty());
        assert!(ParsedMessage::new("t", "Alice", "  ").is_empty());
        assert!(!ParsedMessage::new("t", "Alice", "x").is_empty());
    }

    #[test]
    fn test_serialization_field_names() {
        let msg = ParsedMessage::new("1/2/23 10:00:00 AM", "Alice", "Hi 😀");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["timestamp"], "1/2/23 10:00:00 AM");
        assert_eq!(value["sender"], "Alice");
        assert_eq!(value["body"], "Hi 😀");
        assert_eq!(value["emojis"][0], "😀");
    }

    #[test]
    fn test_deserialization_ignores_stale_emojis() {
        let json = r#"{"timestamp":"t","sender":"Bob","body":"yo 🎉","emojis":["😀","😀"]}"#;
        let msg: ParsedMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.emojis(), ["🎉"]);
    }
}
