//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ReportFormat`] - how statistics are printed
//! - [`MessagesFormat`] - how parsed messages are exported
//!
//! The value enums convert into their library counterparts in
//! [`crate::format`], so the library itself has no clap dependency in its
//! public types.
//!
//! ```rust
//! use chatstats::cli::MessagesFormat;
//! use chatstats::format::OutputFormat;
//!
//! let format: OutputFormat = MessagesFormat::Jsonl.into();
//! assert_eq!(format.extension(), "jsonl");
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{ParserConfig, StatsConfig};
use crate::format::OutputFormat;

/// Default input size limit: 50 MiB.
pub const DEFAULT_MAX_SIZE: u64 = 50 * 1024 * 1024;

/// Summarize an exported chat transcript: senders, emojis and common words.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats chat.txt
    chatstats chat.txt --format json -o stats.json
    chatstats chat.txt --messages messages.csv
    chatstats chat.txt --messages sample.jsonl --sample 100
    chatstats chat.txt --insight-context --question \"Who replies fastest?\"")]
pub struct Args {
    /// Path to the exported transcript (.txt)
    pub input: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also export the parsed messages to this file
    #[arg(long, value_name = "PATH")]
    pub messages: Option<PathBuf>,

    /// Export format for --messages (default: from extension, else csv)
    #[arg(long, value_enum, requires = "messages")]
    pub messages_format: Option<MessagesFormat>,

    /// Export only the first N messages
    #[arg(long, value_name = "N", requires = "messages")]
    pub sample: Option<usize>,

    /// Keep calls, omitted media and other client notifications
    #[arg(long)]
    pub keep_system: bool,

    /// Number of emojis in the ranking
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub top_emojis: usize,

    /// Number of words in the ranking
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top_words: usize,

    /// Print the insight context (statistics plus a message sample) instead of the report
    #[arg(long)]
    pub insight_context: bool,

    /// Question appended to the insight context
    #[arg(long, value_name = "TEXT", requires = "insight_context")]
    pub question: Option<String>,

    /// Maximum input size in bytes
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_SIZE)]
    pub max_size: u64,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parser configuration selected by the flags.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new().with_skip_system_messages(!self.keep_system)
    }

    /// Ranking limits selected by the flags.
    pub fn stats_config(&self) -> StatsConfig {
        StatsConfig::new()
            .with_top_emojis(self.top_emojis)
            .with_top_words(self.top_words)
    }

    /// Export format for `--messages`.
    ///
    /// An explicit `--messages-format` wins; otherwise the extension decides,
    /// falling back to CSV when it is missing or unknown.
    pub fn messages_format(&self) -> OutputFormat {
        if let Some(format) = self.messages_format {
            return format.into();
        }
        self.messages
            .as_deref()
            .and_then(|path| OutputFormat::from_path(path).ok())
            .unwrap_or_default()
    }

    /// Default log filter for the verbosity level.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable summary
    #[default]
    #[value(alias = "txt")]
    Text,

    /// Statistics as JSON with camelCase keys
    Json,
}

/// Message export format options.
///
/// - [`Csv`](MessagesFormat::Csv) - semicolon-delimited, spreadsheet friendly
/// - [`Json`](MessagesFormat::Json) - one array of messages
/// - [`Jsonl`](MessagesFormat::Jsonl) - one message per line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessagesFormat {
    /// CSV with semicolon delimiter
    #[default]
    Csv,

    /// JSON array of messages
    Json,

    /// JSON Lines - one JSON object per line
    #[value(alias = "ndjson")]
    Jsonl,
}

// Conversion to library format types
impl From<MessagesFormat> for OutputFormat {
    fn from(format: MessagesFormat) -> OutputFormat {
        match format {
            MessagesFormat::Csv => OutputFormat::Csv,
            MessagesFormat::Json => OutputFormat::Json,
            MessagesFormat::Jsonl => OutputFormat::Jsonl,
        }
    }
}

impl From<ReportFormat> for crate::format::ReportFormat {
    fn from(format: ReportFormat) -> crate::format::ReportFormat {
        match format {
            ReportFormat::Text => crate::format::ReportFormat::Text,
            ReportFormat::Json => crate::format::ReportFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("chatstats").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["chat.txt"]);
        assert_eq!(args.input, PathBuf::from("chat.txt"));
        assert_eq!(args.format, ReportFormat::Text);
        assert_eq!(args.max_size, 50 * 1024 * 1024);
        assert!(args.parser_config().skip_system_messages);
        assert_eq!(args.stats_config(), StatsConfig::default());
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn test_flags() {
        let args = parse(&[
            "chat.txt",
            "-f",
            "json",
            "--keep-system",
            "--top-emojis",
            "3",
            "--top-words",
            "20",
            "-vv",
        ]);
        assert_eq!(args.format, ReportFormat::Json);
        assert!(!args.parser_config().skip_system_messages);
        assert_eq!(args.stats_config().top_emojis, 3);
        assert_eq!(args.stats_config().top_words, 20);
        assert_eq!(args.log_level(), "trace");
    }

    #[test]
    fn test_messages_format_inference() {
        assert_eq!(
            parse(&["c.txt", "--messages", "out.jsonl"]).messages_format(),
            OutputFormat::Jsonl
        );
        assert_eq!(
            parse(&["c.txt", "--messages", "out.dat"]).messages_format(),
            OutputFormat::Csv
        );
        assert_eq!(
            parse(&["c.txt", "--messages", "out.csv", "--messages-format", "json"])
                .messages_format(),
            OutputFormat::Json
        );
    }

    #[test]
    fn test_dependent_flags_require_parent() {
        let bare = ["chatstats", "c.txt", "--sample", "5"];
        assert!(Args::try_parse_from(bare).is_err());

        let question = ["chatstats", "c.txt", "--question", "why?"];
        assert!(Args::try_parse_from(question).is_err());
    }

    #[test]
    fn test_format_conversions() {
        assert_eq!(OutputFormat::from(MessagesFormat::Json), OutputFormat::Json);
        assert_eq!(
            crate::format::ReportFormat::from(ReportFormat::Json),
            crate::format::ReportFormat::Json
        );
    }

    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&MessagesFormat::Jsonl).unwrap();
        assert_eq!(json, "\"jsonl\"");
    }
}
