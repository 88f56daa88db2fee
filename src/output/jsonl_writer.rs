//! JSON Lines (JSONL) output writer.
//!
//! One message per line, handy for feeding a sample of the conversation to
//! downstream tools record by record.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::message::ParsedMessage;

/// Writes messages to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"timestamp":"1/2/23 10:00:00 AM","sender":"Alice","body":"Hello","emojis":[]}
/// {"timestamp":"1/2/23 10:01:00 AM","sender":"Bob","body":"Hi","emojis":[]}
/// ```
pub fn write_jsonl(messages: &[ParsedMessage], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for msg in messages {
        let line = serde_json::to_string(msg)?;
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts messages to a JSONL string.
pub fn to_jsonl(messages: &[ParsedMessage]) -> Result<String> {
    let mut output = String::new();
    for msg in messages {
        output.push_str(&serde_json::to_string(msg)?);
        output.push('\n');
    }
    Ok(output)
}
