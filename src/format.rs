//! Output format types.
//!
//! Two separate choices exist:
//! - [`OutputFormat`] - how a parsed message sequence is exported (CSV, JSON, JSONL)
//! - [`ReportFormat`] - how [`ChatStats`](crate::stats::ChatStats) are rendered (text, JSON)
//!
//! # Example
//!
//! ```rust
//! use chatstats::format::OutputFormat;
//!
//! let format = OutputFormat::from_path("messages.jsonl").unwrap();
//! assert_eq!(format, OutputFormat::Jsonl);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ChatstatsError;
use crate::message::ParsedMessage;

/// Export format for parsed messages.
///
/// - [`Csv`](OutputFormat::Csv) - semicolon-delimited, one row per message
/// - [`Json`](OutputFormat::Json) - pretty-printed array
/// - [`Jsonl`](OutputFormat::Jsonl) - one JSON object per line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of messages
    Json,

    /// JSON Lines - one JSON object per line
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatstatsError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatstatsError::invalid_format(
                "output format",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: csv, json, jsonl",
                    ext
                ),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Rendering of chat statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable summary (default)
    #[default]
    Text,

    /// `ChatStats` as pretty-printed JSON
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Unknown report format: '{}'. Expected one of: text, json", s)),
        }
    }
}

/// Writes messages to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    messages: &[ParsedMessage],
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<(), ChatstatsError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::write_csv(messages, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::write_json(messages, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::output::write_jsonl(messages, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts messages to a string in the specified format.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "json-output")]
/// # fn example() -> chatstats::Result<()> {
/// use chatstats::format::{OutputFormat, to_format_string};
/// use chatstats::parse_transcript;
///
/// let messages = parse_transcript("[1/2/23, 10:00:00 AM] Alice: Hi");
/// let jsonl = to_format_string(&messages, OutputFormat::Jsonl)?;
/// assert_eq!(jsonl.lines().count(), 1);
/// # Ok(())
/// # }
/// # #[cfg(feature = "json-output")]
/// # example().unwrap();
/// ```
#[allow(unused_variables)]
pub fn to_format_string(
    messages: &[ParsedMessage],
    format: OutputFormat,
) -> Result<String, ChatstatsError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::to_csv(messages),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::to_json(messages),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::output::to_jsonl(messages),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

#[allow(dead_code)]
fn missing_feature(format: OutputFormat) -> ChatstatsError {
    ChatstatsError::invalid_format(
        "output format",
        format!(
            "Output format {} requires the '{}' feature to be enabled",
            format,
            match format {
                OutputFormat::Csv => "csv-output",
                OutputFormat::Json | OutputFormat::Jsonl => "json-output",
            }
        ),
    )
}
