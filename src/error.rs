//! Unified error types for chatstats.
//!
//! Parsing and aggregation never fail: a malformed line is dropped or merged,
//! and a transcript without a single recognizable header is simply an empty
//! message sequence. Errors only come from the layers around the core:
//! reading input, writing output, and the calling layer deciding that "zero
//! messages" is something the user must hear about.
//!
//! Everything is covered by a single [`ChatstatsError`] enum and the
//! [`Result`] alias.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::ParsedMessage;
///
/// fn load() -> Result<Vec<ParsedMessage>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all fallible chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The transcript file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The transcript is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The transcript exceeds the configured size limit.
    #[error("Input too large: {actual_size} bytes (maximum: {max_size} bytes)")]
    InputTooLarge {
        /// Maximum allowed size in bytes
        max_size: u64,
        /// Actual size encountered
        actual_size: u64,
    },

    /// Parsing produced zero messages.
    ///
    /// The parser itself treats this as a valid result. Callers that need
    /// at least one message (the CLI does) raise this variant.
    #[error("No messages found{}. Expected an exported chat with lines like: [MM/DD/YY, HH:MM:SS AM] Sender: Message", .path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    NoMessages {
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// An unrecognized format name or file extension.
    #[error("Invalid {kind}: {message}")]
    InvalidFormat {
        /// What was being interpreted (e.g. "output format")
        kind: &'static str,
        /// Description of what's wrong
        message: String,
    },
}

impl From<std::string::FromUtf8Error> for ChatstatsError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatsError::Utf8 {
            context: "transcript".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates a "no messages found" error.
    pub fn no_messages(path: Option<PathBuf>) -> Self {
        ChatstatsError::NoMessages { path }
    }

    /// Creates an input size error.
    pub fn input_too_large(max_size: u64, actual_size: u64) -> Self {
        ChatstatsError::InputTooLarge {
            max_size,
            actual_size,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(kind: &'static str, message: impl Into<String>) -> Self {
        ChatstatsError::InvalidFormat {
            kind,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if parsing found nothing.
    pub fn is_no_messages(&self) -> bool {
        matches!(self, ChatstatsError::NoMessages { .. })
    }

    /// Returns `true` if the input was rejected for its size.
    pub fn is_input_too_large(&self) -> bool {
        matches!(self, ChatstatsError::InputTooLarge { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatstatsError::InvalidFormat { .. })
    }
}
