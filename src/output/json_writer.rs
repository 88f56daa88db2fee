//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::message::ParsedMessage;
use crate::stats::ChatStats;

/// Writes messages to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "1/2/23 10:00:00 AM", "sender": "Alice", "body": "Hi 😀", "emojis": ["😀"]}
/// ]
/// ```
pub fn write_json(messages: &[ParsedMessage], output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(messages)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts messages to a pretty-printed JSON array.
pub fn to_json(messages: &[ParsedMessage]) -> Result<String> {
    Ok(serde_json::to_string_pretty(messages)?)
}

/// Converts statistics to pretty-printed JSON with camelCase keys.
pub fn stats_to_json(stats: &ChatStats) -> Result<String> {
    Ok(serde_json::to_string_pretty(stats)?)
}
