//! Plain-text context for narrative insight generation.
//!
//! The statistics on their own say little about *how* people talk, so the
//! context pairs them with a short sample of the conversation. An optional
//! question from the user is appended last.
//!
//! # Example
//!
//! ```rust
//! use chatstats::insight::InsightContext;
//! use chatstats::{aggregate, parse_transcript};
//!
//! let messages = parse_transcript("[1/2/23, 10:00:00 AM] Alice: pizza tonight? 🍕");
//! let stats = aggregate(&messages);
//!
//! let context = InsightContext::new(&stats)
//!     .with_messages(&messages)
//!     .with_question("Who suggests food the most?")
//!     .render();
//!
//! assert!(context.contains("1. Alice: 1 messages (100.0%)"));
//! assert!(context.contains("[1/2/23 10:00:00 AM] Alice: pizza tonight? 🍕"));
//! assert!(context.ends_with("USER QUESTION: Who suggests food the most?\n"));
//! ```

use crate::message::ParsedMessage;
use crate::output::join_items;
use crate::stats::ChatStats;

/// Participants listed in the context.
pub const TOP_PARTICIPANTS: usize = 5;
/// Messages included in the sample.
pub const SAMPLE_MESSAGES: usize = 20;
/// Characters of each sampled body kept before the `...` marker.
pub const BODY_PREVIEW_CHARS: usize = 100;

/// Builder for the insight context text.
#[derive(Debug, Clone)]
pub struct InsightContext<'a> {
    stats: &'a ChatStats,
    messages: &'a [ParsedMessage],
    question: Option<String>,
}

impl<'a> InsightContext<'a> {
    /// Starts a context from aggregated statistics.
    pub fn new(stats: &'a ChatStats) -> Self {
        Self {
            stats,
            messages: &[],
            question: None,
        }
    }

    /// Adds a conversation sample; only the first messages are used.
    #[must_use]
    pub fn with_messages(mut self, messages: &'a [ParsedMessage]) -> Self {
        self.messages = messages;
        self
    }

    /// Appends a free-text question. Blank questions are ignored.
    #[must_use]
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        let question = question.into();
        self.question = (!question.trim().is_empty()).then_some(question);
        self
    }

    /// Renders the context.
    pub fn render(&self) -> String {
        let stats = self.stats;
        let mut out = String::new();

        out.push_str("WhatsApp Chat Statistics:\n\n");
        out.push_str(&format!("Total Messages: {}\n", stats.total_messages));
        out.push_str(&format!("Duration: {}\n", stats.conversation_started));

        out.push_str("\nTop Participants:\n");
        for (rank, sender) in stats.top_senders.iter().take(TOP_PARTICIPANTS).enumerate() {
            out.push_str(&format!(
                "{}. {}: {} messages ({})\n",
                rank + 1,
                sender.sender,
                sender.count,
                sender.percentage
            ));
        }

        out.push_str("\nEmojis Used:\n");
        out.push_str(&format!("Total: {}\n", stats.total_emojis));
        out.push_str(&format!("Most used: {}\n", join_items(&stats.top_emojis)));

        out.push_str("\nCommon Words:\n");
        out.push_str(&join_items(&stats.top_words));
        out.push('\n');

        if !self.messages.is_empty() {
            out.push_str(&format!("\nSample Messages (first {SAMPLE_MESSAGES}):\n"));
            for message in self.messages.iter().take(SAMPLE_MESSAGES) {
                out.push_str(&format!(
                    "[{}] {}: {}\n",
                    message.timestamp(),
                    message.sender(),
                    preview(message.body())
                ));
            }
        }

        if let Some(question) = &self.question {
            out.push_str(&format!("\nUSER QUESTION: {}\n", question.trim()));
        }

        out
    }
}

/// First [`BODY_PREVIEW_CHARS`] characters of `body`, `...` appended if cut.
fn preview(body: &str) -> String {
    match body.char_indices().nth(BODY_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate;

    fn msg(i: usize, body: &str) -> ParsedMessage {
        ParsedMessage::new(format!("t{i}"), format!("user{}", i % 7), body)
    }

    #[test]
    fn test_only_top_five_participants() {
        let messages: Vec<ParsedMessage> = (0..14).map(|i| msg(i, "hello")).collect();
        let stats = aggregate(&messages);
        let context = InsightContext::new(&stats).render();

        assert!(context.contains("5. "));
        assert!(!context.contains("6. "));
        assert!(!context.contains("Sample Messages"));
        assert!(!context.contains("USER QUESTION"));
    }

    #[test]
    fn test_sample_is_first_twenty() {
        let messages: Vec<ParsedMessage> = (0..30).map(|i| msg(i, "hello")).collect();
        let stats = aggregate(&messages);
        let context = InsightContext::new(&stats).with_messages(&messages).render();

        assert!(context.contains("Sample Messages (first 20):"));
        assert!(context.contains("[t19] user5: hello"));
        assert!(!context.contains("[t20]"));
    }

    #[test]
    fn test_long_bodies_are_truncated() {
        assert_eq!(preview(&"a".repeat(100)), "a".repeat(100));
        assert_eq!(preview(&"b".repeat(101)), format!("{}...", "b".repeat(100)));
        // Counted in characters, not bytes.
        let emojis = "😀".repeat(101);
        assert_eq!(preview(&emojis), format!("{}...", "😀".repeat(100)));
    }

    #[test]
    fn test_question_appended_last() {
        let stats = aggregate(&[msg(0, "hello")]);
        let context = InsightContext::new(&stats)
            .with_question("  who talks most?  ")
            .render();
        assert!(context.ends_with("\nUSER QUESTION: who talks most?\n"));

        let blank = InsightContext::new(&stats).with_question("   ").render();
        assert!(!blank.contains("USER QUESTION"));
    }

    #[test]
    fn test_header_lines() {
        let stats = aggregate(&[msg(0, "hello"), msg(1, "again")]);
        let context = InsightContext::new(&stats).render();
        assert!(context.starts_with("WhatsApp Chat Statistics:\n\nTotal Messages: 2\nDuration: t0\n"));
        assert!(context.contains("\nTop Participants:\n1. user0: 1 messages (50.0%)\n"));
        assert!(context.ends_with("\nCommon Words:\nhello (1), again (1)\n"));
    }

    #[test]
    fn test_rankings_listed() {
        let stats = aggregate(&[msg(0, "pizza pizza pasta 🍕")]);
        let context = InsightContext::new(&stats).render();
        assert!(context.contains("Total: 1\n"));
        assert!(context.contains("Most used: 🍕 (1)\n"));
        assert!(context.contains("pizza (2), pasta (1)\n"));
    }
}
