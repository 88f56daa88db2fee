//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{ChatstatsError, Result};
use crate::message::ParsedMessage;

const HEADER: [&str; 4] = ["Timestamp", "Sender", "Body", "Emojis"];

/// Writes messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Sender`, `Body`, `Emojis`
/// - `Emojis` is the message's emoji list concatenated, e.g. `😀😀🎉`
/// - Multi-line bodies are quoted
/// - Encoding: UTF-8
pub fn write_csv(messages: &[ParsedMessage], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(messages, file)?;
    Ok(())
}

/// Converts messages to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(messages: &[ParsedMessage]) -> Result<String> {
    let buffer = write_records(messages, Vec::new())?;
    String::from_utf8(buffer).map_err(|source| ChatstatsError::Utf8 {
        context: "CSV output".to_string(),
        source,
    })
}

fn write_records<W: Write>(messages: &[ParsedMessage], sink: W) -> Result<W> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(HEADER)?;
    for msg in messages {
        let emojis = msg.emojis().concat();
        writer.write_record([msg.timestamp(), msg.sender(), msg.body(), emojis.as_str()])?;
    }

    writer
        .into_inner()
        .map_err(|e| ChatstatsError::Io(e.into_error()))
}
