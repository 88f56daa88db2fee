//! Line-level building blocks of the transcript parser.
//!
//! - [`normalize`] - BOM and directional-mark stripping
//! - [`header`] - the ordered header grammar catalog
//! - [`system`] - client-generated notification filter
//! - [`emoji`] - emoji extraction
//!
//! [`TranscriptParser`](crate::parser::TranscriptParser) wires these into the
//! line state machine.

pub mod emoji;
pub mod header;
pub mod normalize;
pub mod system;

pub use emoji::{extract_emojis, is_emoji};
pub use header::{HeaderFormat, HeaderMatch, is_header, match_header};
pub use normalize::normalize_line;
pub use system::is_system_message;
