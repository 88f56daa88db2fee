//! Header grammars for exported chat transcripts.
//!
//! Exports vary by platform and locale. A header line always carries a date,
//! a time, a sender and the start of the message text, but the punctuation
//! around them differs:
//!
//! - iOS: `[1/15/24, 10:30:45 AM] Sender: Message`
//! - iOS (24h locales): `[15.01.24, 10:30:45] Sender: Message`
//! - Android: `15/01/2024, 10:30 - Sender: Message`
//! - Android (12h locales): `1/15/24, 10:30 PM - Sender: Message`
//! - ISO-ordered dates: `[2024-01-15, 10:30:45] Sender: Message`
//!
//! Every [`HeaderFormat`] accepts slash, dot and ISO dates; the variants
//! differ in delimiter style, time precision and clock. They are evaluated in
//! the fixed order of [`HeaderFormat::all`] and the first match wins.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Date alternatives shared by every grammar: `M/D/YY`, `DD.MM.YYYY`, `YYYY-MM-DD`.
const DATE: &str = r"(\d{1,2}/\d{1,2}/\d{2,4}|\d{1,2}\.\d{1,2}\.\d{2,4}|\d{4}-\d{1,2}-\d{1,2})";
const SECONDS: &str = r"\d{1,2}:\d{2}:\d{2}";
const MINUTES: &str = r"\d{1,2}:\d{2}";
/// AM/PM marker, either case, optionally after a space, NBSP or narrow NBSP.
const MERIDIEM: &str = r"[ \x{00A0}\x{202F}]?[AaPp][Mm]";
/// Sender up to the first colon, then the remainder.
const SENDER_AND_TEXT: &str = r"([^:]+):\s*(.*)$";

/// One header grammar of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderFormat {
    /// `[1/15/24, 10:30:45 AM] Sender: Message`
    BracketedSeconds12h,
    /// `[15.01.24, 10:30:45] Sender: Message`
    BracketedSeconds24h,
    /// `[1/15/24, 10:30 AM] Sender: Message`
    BracketedMinutes12h,
    /// `[15/01/2024, 10:30] Sender: Message`
    BracketedMinutes24h,
    /// `1/15/24, 10:30:45 PM - Sender: Message`
    DashedSeconds12h,
    /// `15.01.2024, 10:30:45 - Sender: Message`
    DashedSeconds24h,
    /// `1/15/24, 10:30 PM - Sender: Message`
    DashedMinutes12h,
    /// `26.10.2025, 20:40 - Sender: Message`
    DashedMinutes24h,
}

impl HeaderFormat {
    /// Returns the catalog in evaluation order.
    ///
    /// Within each delimiter style, seconds precision precedes minute
    /// precision and 12-hour clocks precede 24-hour clocks.
    pub fn all() -> &'static [HeaderFormat] {
        &[
            HeaderFormat::BracketedSeconds12h,
            HeaderFormat::BracketedSeconds24h,
            HeaderFormat::BracketedMinutes12h,
            HeaderFormat::BracketedMinutes24h,
            HeaderFormat::DashedSeconds12h,
            HeaderFormat::DashedSeconds24h,
            HeaderFormat::DashedMinutes12h,
            HeaderFormat::DashedMinutes24h,
        ]
    }

    /// Returns `true` for `[date, time]` headers, `false` for `date, time -` headers.
    pub fn is_bracketed(self) -> bool {
        matches!(
            self,
            HeaderFormat::BracketedSeconds12h
                | HeaderFormat::BracketedSeconds24h
                | HeaderFormat::BracketedMinutes12h
                | HeaderFormat::BracketedMinutes24h
        )
    }

    /// Returns `true` if the time carries seconds.
    pub fn has_seconds(self) -> bool {
        matches!(
            self,
            HeaderFormat::BracketedSeconds12h
                | HeaderFormat::BracketedSeconds24h
                | HeaderFormat::DashedSeconds12h
                | HeaderFormat::DashedSeconds24h
        )
    }

    /// Returns `true` if the time carries an AM/PM marker.
    pub fn is_twelve_hour(self) -> bool {
        matches!(
            self,
            HeaderFormat::BracketedSeconds12h
                | HeaderFormat::BracketedMinutes12h
                | HeaderFormat::DashedSeconds12h
                | HeaderFormat::DashedMinutes12h
        )
    }

    /// Returns the regex pattern for this grammar.
    ///
    /// Capture groups: 1 = date, 2 = time, 3 = sender, 4 = remainder.
    pub fn pattern(self) -> String {
        let clock = if self.has_seconds() { SECONDS } else { MINUTES };
        let meridiem = if self.is_twelve_hour() { MERIDIEM } else { "" };

        if self.is_bracketed() {
            format!(r"^\[{DATE},\s*({clock}{meridiem})\]\s*{SENDER_AND_TEXT}")
        } else {
            format!(r"^{DATE},?\s+({clock}{meridiem})\s+-\s+{SENDER_AND_TEXT}")
        }
    }
}

impl fmt::Display for HeaderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let delimiter = if self.is_bracketed() { "bracketed" } else { "dashed" };
        let precision = if self.has_seconds() { "seconds" } else { "minutes" };
        let clock = if self.is_twelve_hour() { "12h" } else { "24h" };
        write!(f, "{delimiter}/{precision}/{clock}")
    }
}

/// Compiled grammars, in catalog order.
static GRAMMARS: Lazy<Vec<(HeaderFormat, Regex)>> = Lazy::new(|| {
    HeaderFormat::all()
        .iter()
        .map(|&format| {
            // Patterns are built from the constants above; failure is a programming error.
            let regex = Regex::new(&format.pattern()).expect("header grammar must compile");
            (format, regex)
        })
        .collect()
});

/// The pieces of a recognized header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMatch<'a> {
    /// The grammar that matched.
    pub format: HeaderFormat,
    /// Date exactly as written.
    pub date: &'a str,
    /// Time exactly as written, including any AM/PM marker.
    pub time: &'a str,
    /// Sender, trimmed, never empty.
    pub sender: &'a str,
    /// Message text after the sender's colon. May be empty.
    pub remainder: &'a str,
}

impl HeaderMatch<'_> {
    /// Returns the display timestamp `"{date} {time}"`.
    ///
    /// Non-breaking spaces some exports put before AM/PM become plain spaces.
    pub fn timestamp(&self) -> String {
        let time = self.time.replace(['\u{00A0}', '\u{202F}'], " ");
        format!("{} {}", self.date, time)
    }
}

/// Tries every grammar in catalog order and returns the first match.
///
/// Returns `None` when no grammar matches or the sender is blank; the line is
/// then not a header.
///
/// # Example
///
/// ```rust
/// use chatstats::parsing::{match_header, HeaderFormat};
///
/// let header = match_header("[1/2/23, 10:00:00 AM] Alice: Hi").unwrap();
/// assert_eq!(header.format, HeaderFormat::BracketedSeconds12h);
/// assert_eq!(header.sender, "Alice");
/// assert_eq!(header.timestamp(), "1/2/23 10:00:00 AM");
/// ```
pub fn match_header(line: &str) -> Option<HeaderMatch<'_>> {
    GRAMMARS.iter().find_map(|(format, regex)| {
        let caps = regex.captures(line)?;
        let sender = caps.get(3)?.as_str().trim();
        if sender.is_empty() {
            return None;
        }

        Some(HeaderMatch {
            format: *format,
            date: caps.get(1)?.as_str(),
            time: caps.get(2)?.as_str(),
            sender,
            remainder: caps.get(4).map_or("", |m| m.as_str()),
        })
    })
}

/// Returns `true` if `line` is a header line.
pub fn is_header(line: &str) -> bool {
    match_header(line).is_some()
}
