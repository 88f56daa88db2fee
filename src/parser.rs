//! The transcript parser.
//!
//! Turns the raw text of an exported chat into an ordered list of
//! [`ParsedMessage`]s. Each physical line goes through the same pipeline:
//!
//! 1. [`normalize_line`] strips BOM / directional marks; empty lines stop here.
//! 2. [`match_header`] tries the grammar catalog in order.
//! 3. A header whose text is a client notification ([`is_system_message`])
//!    or empty is discarded whole; any other header starts a new message.
//! 4. A line that is not a header is appended to the current message, or
//!    dropped if no message has started yet.
//!
//! Parsing never fails. A transcript without any recognizable header yields
//! an empty list, and it is up to the caller to report that.
//!
//! # Example
//!
//! ```rust
//! use chatstats::parser::TranscriptParser;
//!
//! let text = "[1/2/23, 10:00:00 AM] Alice: Hi 😀\nstill here";
//! let messages = TranscriptParser::new().parse_str(text);
//!
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].body(), "Hi 😀\nstill here");
//! ```

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::ParserConfig;
use crate::message::ParsedMessage;
use crate::parsing::{is_system_message, match_header, normalize_line};

/// Where the line state machine stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserState {
    /// No message accepted yet; non-header lines are dropped.
    #[default]
    AwaitingFirstMessage,
    /// A message is open; non-header lines extend it.
    InMessage,
}

/// Line counts gathered during one parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ParseSummary {
    /// Physical lines read.
    pub lines: usize,
    /// Lines that normalized to nothing.
    pub blank_lines: usize,
    /// Header lines that started a message.
    pub messages: usize,
    /// Header lines discarded as client notifications.
    pub system_messages: usize,
    /// Header lines with nothing after the sender.
    pub empty_headers: usize,
    /// Lines merged into the previous message.
    pub continuations: usize,
    /// Non-header lines seen before the first message.
    pub orphan_lines: usize,
}

/// Parser for exported chat transcripts.
///
/// Stateless between calls, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a whole transcript.
    pub fn parse_str(&self, text: &str) -> Vec<ParsedMessage> {
        self.parse_lines(text.lines())
    }

    /// Parses a transcript and also returns line counts.
    pub fn parse_with_summary(&self, text: &str) -> (Vec<ParsedMessage>, ParseSummary) {
        let mut assembler = Assembler::new(&self.config);
        for line in text.lines() {
            assembler.feed(line);
        }
        assembler.finish()
    }

    /// Parses pre-split lines.
    pub fn parse_lines<'a, I>(&self, lines: I) -> Vec<ParsedMessage>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut assembler = Assembler::new(&self.config);
        for line in lines {
            assembler.feed(line);
        }
        assembler.finish().0
    }
}

/// Parses `text` with the default configuration.
///
/// # Example
///
/// ```rust
/// use chatstats::parse_transcript;
///
/// let messages = parse_transcript("[1/2/23, 10:00:00 AM] Alice: Hi 😀");
/// assert_eq!(messages[0].sender(), "Alice");
/// assert_eq!(messages[0].timestamp(), "1/2/23 10:00:00 AM");
/// assert_eq!(messages[0].emojis(), ["😀"]);
/// ```
pub fn parse_transcript(text: &str) -> Vec<ParsedMessage> {
    TranscriptParser::new().parse_str(text)
}

/// The line state machine behind [`TranscriptParser`].
struct Assembler<'c> {
    config: &'c ParserConfig,
    state: ParserState,
    messages: Vec<ParsedMessage>,
    summary: ParseSummary,
}

impl<'c> Assembler<'c> {
    fn new(config: &'c ParserConfig) -> Self {
        Self {
            config,
            state: ParserState::AwaitingFirstMessage,
            messages: Vec::new(),
            summary: ParseSummary::default(),
        }
    }

    fn feed(&mut self, raw: &str) {
        self.summary.lines += 1;

        let Some(line) = normalize_line(raw) else {
            self.summary.blank_lines += 1;
            return;
        };

        if let Some(header) = match_header(line) {
            if self.config.skip_system_messages && is_system_message(header.remainder) {
                self.summary.system_messages += 1;
                trace!(line = self.summary.lines, sender = header.sender, "skipping system message");
                return;
            }
            if header.remainder.trim().is_empty() {
                self.summary.empty_headers += 1;
                trace!(line = self.summary.lines, sender = header.sender, "skipping empty header");
                return;
            }

            self.messages.push(ParsedMessage::new(
                header.timestamp(),
                header.sender,
                header.remainder,
            ));
            self.summary.messages += 1;
            self.state = ParserState::InMessage;
            return;
        }

        match self.state {
            ParserState::InMessage => {
                if let Some(current) = self.messages.last_mut() {
                    current.append_line(line);
                    self.summary.continuations += 1;
                }
            }
            ParserState::AwaitingFirstMessage => {
                self.summary.orphan_lines += 1;
                trace!(line = self.summary.lines, "dropping line before first message");
            }
        }
    }

    fn finish(self) -> (Vec<ParsedMessage>, ParseSummary) {
        debug!(
            lines = self.summary.lines,
            messages = self.summary.messages,
            system_messages = self.summary.system_messages,
            empty_headers = self.summary.empty_headers,
            continuations = self.summary.continuations,
            orphan_lines = self.summary.orphan_lines,
            "parsed transcript"
        );
        (self.messages, self.summary)
    }
}
