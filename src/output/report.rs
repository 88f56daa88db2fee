//! Plain-text statistics report.

use crate::stats::{ChatStats, FrequencyItem};

/// Renders statistics as a human-readable report.
///
/// ```text
/// Total messages: 3
/// Conversation started: 1/2/23 10:00:00 AM
/// Total emojis: 3
///
/// Senders:
///   1. Alice - 2 messages (66.7%)
///   2. Bob - 1 messages (33.3%)
///
/// Top emojis: 🍕 (3)
/// Top words: pizza (2), again (1)
/// ```
pub fn render_report(stats: &ChatStats) -> String {
    let mut out = String::new();

    let started = if stats.conversation_started.is_empty() {
        "-"
    } else {
        stats.conversation_started.as_str()
    };
    out.push_str(&format!("Total messages: {}\n", stats.total_messages));
    out.push_str(&format!("Conversation started: {started}\n"));
    out.push_str(&format!("Total emojis: {}\n", stats.total_emojis));

    out.push_str("\nSenders:\n");
    if stats.top_senders.is_empty() {
        out.push_str("  (none)\n");
    }
    for (rank, sender) in stats.top_senders.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {} - {} messages ({})\n",
            rank + 1,
            sender.sender,
            sender.count,
            sender.percentage
        ));
    }

    out.push_str(&format!("\nTop emojis: {}\n", join_items(&stats.top_emojis)));
    out.push_str(&format!("Top words: {}\n", join_items(&stats.top_words)));

    out
}

/// `key (count), key (count)` or `-` when empty.
pub(crate) fn join_items(items: &[FrequencyItem]) -> String {
    if items.is_empty() {
        return "-".to_string();
    }
    items
        .iter()
        .map(|item| format!("{} ({})", item.key, item.count))
        .collect::<Vec<_>>()
        .join(", ")
}
