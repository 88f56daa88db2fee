//! # Chatstats
//!
//! A Rust library for parsing exported chat transcripts (WhatsApp-style
//! "Export chat" text files) and summarizing them: who talks most, which
//! emojis are used, and which words come up.
//!
//! ## Overview
//!
//! The pipeline has two pure stages:
//! - **Parsing** - [`parse_transcript`] turns raw transcript text into an
//!   ordered list of [`ParsedMessage`]s. Bracketed and dashed headers, 12h and
//!   24h clocks, with or without seconds, are all recognized; continuation
//!   lines are merged into the message above them and client notifications
//!   ("image omitted", "Messages and calls are end-to-end encrypted", ...) are
//!   dropped.
//! - **Aggregation** - [`aggregate`] computes [`ChatStats`]: message totals,
//!   per-sender counts and percentages, top emojis and top words.
//!
//! Neither stage can fail. A transcript without a single recognizable header
//! parses to an empty list; reporting that is the caller's call.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstats::{aggregate, parse_transcript};
//!
//! let text = "\
//! [1/2/23, 10:00:00 AM] Alice: Pizza tonight? 🍕
//! [1/2/23, 10:01:00 AM] Bob: yes!! 🍕🎉
//! and dessert
//! [1/2/23, 10:02:00 AM] Alice: \u{200E}image omitted";
//!
//! let messages = parse_transcript(text);
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[1].body(), "yes!! 🍕🎉\nand dessert");
//!
//! let stats = aggregate(&messages);
//! assert_eq!(stats.total_messages, 2);
//! assert_eq!(stats.total_emojis, 3);
//! assert_eq!(stats.top_emojis[0].key, "🍕");
//! assert_eq!(stats.top_senders[0].percentage, "50.0%");
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`], the line state machine
//! - [`parsing`] - line-level building blocks
//!   - [`normalize_line`](parsing::normalize_line), [`match_header`](parsing::match_header),
//!     [`HeaderFormat`](parsing::HeaderFormat), [`is_system_message`](parsing::is_system_message),
//!     [`extract_emojis`](parsing::extract_emojis)
//! - [`stats`] - [`aggregate`], [`ChatStats`], word tokenization
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`StatsConfig`](config::StatsConfig)
//! - [`output`] - CSV / JSON / JSONL message export, text and JSON reports
//! - [`insight`] - plain-text context for narrative insight generation
//! - [`format`] - [`OutputFormat`](format::OutputFormat), [`ReportFormat`](format::ReportFormat)
//! - [`error`] - [`ChatstatsError`], [`Result`]
//! - [`prelude`] - convenient re-exports
//!
//! ## Feature Flags
//!
//! | Feature | Description | Dependencies |
//! |---------|-------------|--------------|
//! | `csv-output` | CSV message export | `csv` |
//! | `json-output` | JSON/JSONL export, JSON report | `serde_json` |
//! | `cli` | `chatstats` binary | `clap`, `tracing-subscriber` |
//! | `full` | All of the above (default) | |
//! | `gen-test` | `gen_test` synthetic transcript generator | `rand` |

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod insight;
pub mod message;
pub mod output;
pub mod parser;
pub mod parsing;
pub mod stats;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatsError, Result};
pub use message::ParsedMessage;
pub use parser::{TranscriptParser, parse_transcript};
pub use stats::{ChatStats, aggregate, aggregate_with};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatstats::prelude::*;
///
/// let stats = aggregate(&parse_transcript("[1/2/23, 10:00:00 AM] Alice: hi"));
/// assert_eq!(stats.total_messages, 1);
/// ```
pub mod prelude {
    // Core types
    pub use crate::message::ParsedMessage;
    pub use crate::stats::{ChatStats, FrequencyItem, SenderStat};

    // Error types
    pub use crate::error::{ChatstatsError, Result};

    // Parsing and aggregation
    pub use crate::parser::{ParseSummary, TranscriptParser, parse_transcript};
    pub use crate::stats::{aggregate, aggregate_with};

    // Configuration
    pub use crate::config::{ParserConfig, StatsConfig};

    // Output
    pub use crate::format::{OutputFormat, ReportFormat, to_format_string, write_to_format};
    pub use crate::insight::InsightContext;
    pub use crate::output::render_report;
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{stats_to_json, to_json, to_jsonl, write_json, write_jsonl};
}
