//! Configuration types for the parser and the aggregator.
//!
//! Plain builder structs with no CLI framework dependencies. The defaults
//! are the standard behavior: system notifications are dropped, the top 5
//! emojis and top 10 words are reported.
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::{ParserConfig, StatsConfig};
//! use chatstats::parser::TranscriptParser;
//!
//! let parser = TranscriptParser::with_config(
//!     ParserConfig::new().with_skip_system_messages(false),
//! );
//!
//! let stats_config = StatsConfig::new().with_top_words(20);
//! assert_eq!(stats_config.top_emojis, 5);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatstats::config::ParserConfig;
///
/// let config = ParserConfig::new()
///     .with_skip_system_messages(true);
/// assert!(config.skip_system_messages);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Drop calls, omitted media, membership changes and similar client
    /// notifications (default: true)
    pub skip_system_messages: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            skip_system_messages: true,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to skip system messages.
    #[must_use]
    pub fn with_skip_system_messages(mut self, skip: bool) -> Self {
        self.skip_system_messages = skip;
        self
    }
}

/// Configuration for statistics aggregation.
///
/// Senders are always ranked in full; only the emoji and word rankings are
/// truncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Number of emojis in `topEmojis` (default: 5)
    pub top_emojis: usize,

    /// Number of words in `topWords` (default: 10)
    pub top_words: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            top_emojis: 5,
            top_words: 10,
        }
    }
}

impl StatsConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the length of the emoji ranking.
    #[must_use]
    pub fn with_top_emojis(mut self, n: usize) -> Self {
        self.top_emojis = n;
        self
    }

    /// Sets the length of the word ranking.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }
}
