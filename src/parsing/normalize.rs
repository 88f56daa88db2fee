//! Physical line cleanup applied before any grammar sees a line.

/// Byte-order mark.
const BOM: char = '\u{FEFF}';
/// Left-to-right mark.
const LRM: char = '\u{200E}';
/// Right-to-left mark.
const RLM: char = '\u{200F}';

/// Strips a leading byte-order mark and leading directional marks, then trims
/// surrounding whitespace.
///
/// Returns `None` for a line that normalizes to nothing; such a line is
/// neither a header candidate nor a continuation fragment.
///
/// # Example
///
/// ```rust
/// use chatstats::parsing::normalize_line;
///
/// assert_eq!(normalize_line("\u{FEFF}\u{200E}[1/2/23, 10:00:00 AM] A: hi  "), Some("[1/2/23, 10:00:00 AM] A: hi"));
/// assert_eq!(normalize_line(" \u{200E} "), None);
/// ```
pub fn normalize_line(line: &str) -> Option<&str> {
    let stripped = line
        .trim_start()
        .trim_start_matches(|c| c == BOM || c == LRM || c == RLM)
        .trim();

    if stripped.is_empty() {
        None
    } else {
        Some(stripped)
    }
}
