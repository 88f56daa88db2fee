//! Summary statistics over a parsed message sequence.
//!
//! [`aggregate`] is a pure function of its input: the same messages always
//! produce the same [`ChatStats`]. All rankings sort by count descending and
//! break ties by the order in which keys were first encountered.
//!
//! # Example
//!
//! ```rust
//! use chatstats::{aggregate, parse_transcript};
//!
//! let messages = parse_transcript(
//!     "[1/2/23, 10:00:00 AM] Alice: pizza 🍕\n\
//!      [1/2/23, 10:01:00 AM] Bob: pizza again 🍕🍕\n\
//!      [1/2/23, 10:02:00 AM] Alice: fine",
//! );
//! let stats = aggregate(&messages);
//!
//! assert_eq!(stats.total_messages, 3);
//! assert_eq!(stats.total_emojis, 3);
//! assert_eq!(stats.top_senders[0].sender, "Alice");
//! assert_eq!(stats.top_senders[0].percentage, "66.7%");
//! assert_eq!(stats.top_words[0].key, "pizza");
//! ```

mod frequency;
mod words;

pub use frequency::FrequencyTable;
pub use words::{is_stopword, tokenize_words};

use serde::{Deserialize, Serialize};

use crate::config::StatsConfig;
use crate::message::ParsedMessage;

/// A sender's share of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderStat {
    /// Sender name.
    pub sender: String,
    /// Number of messages sent.
    pub count: usize,
    /// Share of all messages, one decimal place, e.g. `"33.3%"`.
    pub percentage: String,
}

/// One entry of an emoji or word ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyItem {
    /// The emoji or word.
    pub key: String,
    /// Number of occurrences.
    pub count: usize,
}

/// Summary of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatStats {
    /// Number of messages.
    pub total_messages: usize,
    /// Timestamp of the first message, `""` when there are none.
    pub conversation_started: String,
    /// Every emoji occurrence across all messages, duplicates included.
    pub total_emojis: usize,
    /// All senders, most active first.
    pub top_senders: Vec<SenderStat>,
    /// Most used emojis (5 by default).
    pub top_emojis: Vec<FrequencyItem>,
    /// Most common words (10 by default).
    pub top_words: Vec<FrequencyItem>,
}

impl ChatStats {
    /// Returns `true` if the statistics describe an empty conversation.
    pub fn is_empty(&self) -> bool {
        self.total_messages == 0
    }
}

/// Aggregates messages with the default ranking limits.
pub fn aggregate(messages: &[ParsedMessage]) -> ChatStats {
    aggregate_with(messages, &StatsConfig::default())
}

/// Aggregates messages with custom ranking limits.
pub fn aggregate_with(messages: &[ParsedMessage], config: &StatsConfig) -> ChatStats {
    let mut senders = FrequencyTable::new();
    let mut emojis = FrequencyTable::new();
    let mut words = FrequencyTable::new();

    for message in messages {
        senders.add(message.sender());
        emojis.extend(message.emojis().iter().map(String::as_str));
        for word in tokenize_words(message.body()) {
            words.add(&word);
        }
    }

    let total_messages = messages.len();

    ChatStats {
        total_messages,
        conversation_started: messages
            .first()
            .map(|m| m.timestamp().to_owned())
            .unwrap_or_default(),
        total_emojis: emojis.total(),
        top_senders: senders
            .ranked()
            .into_iter()
            .map(|(sender, count)| SenderStat {
                sender: sender.to_owned(),
                count,
                percentage: format_percentage(count, total_messages),
            })
            .collect(),
        top_emojis: frequency_items(&emojis, config.top_emojis),
        top_words: frequency_items(&words, config.top_words),
    }
}

fn frequency_items(table: &FrequencyTable, n: usize) -> Vec<FrequencyItem> {
    table
        .top(n)
        .into_iter()
        .map(|(key, count)| FrequencyItem {
            key: key.to_owned(),
            count,
        })
        .collect()
}

/// Formats `count / total` as a percentage with one decimal, halves rounded up.
fn format_percentage(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    let percent = count as f64 / total as f64 * 100.0;
    let rounded = (percent * 10.0).round() / 10.0;
    format!("{rounded:.1}%")
}
