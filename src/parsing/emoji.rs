//! Emoji extraction.
//!
//! Emojis are recognized per code point against a fixed set of Unicode
//! blocks. Each occurrence is reported separately, so `"🔥🔥"` yields two
//! entries.

/// Emoji and symbol blocks, as inclusive code-point ranges.
const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F600, 0x1F64F), // Emoticons
    (0x1F300, 0x1F5FF), // Miscellaneous Symbols and Pictographs
    (0x1F680, 0x1F6FF), // Transport and Map Symbols
    (0x1F1E0, 0x1F1FF), // Regional Indicator Symbols
    (0x2600, 0x26FF),   // Miscellaneous Symbols
    (0x2700, 0x27BF),   // Dingbats
    (0x1F900, 0x1F9FF), // Supplemental Symbols and Pictographs
    (0x1FA70, 0x1FAFF), // Symbols and Pictographs Extended-A
];

/// Returns `true` if `c` lies in one of the emoji blocks.
pub fn is_emoji(c: char) -> bool {
    let code = u32::from(c);
    EMOJI_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&code))
}

/// Returns every emoji in `text`, first to last, duplicates included.
///
/// # Example
///
/// ```rust
/// use chatstats::parsing::extract_emojis;
///
/// assert_eq!(extract_emojis("🔥 Hello 🔥 world ❤"), ["🔥", "🔥", "❤"]);
/// assert!(extract_emojis("plain text").is_empty());
/// ```
pub fn extract_emojis(text: &str) -> Vec<String> {
    text.chars()
        .filter(|&c| is_emoji(c))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_and_duplicates() {
        assert_eq!(extract_emojis("😀 a 🎉 b 😀"), ["😀", "🎉", "😀"]);
    }

    #[test]
    fn test_block_boundaries() {
        assert!(is_emoji('\u{1F600}'));
        assert!(is_emoji('\u{1F64F}'));
        assert!(is_emoji('\u{2600}'));
        assert!(is_emoji('\u{27BF}'));
        assert!(is_emoji('🤣'));
        assert!(is_emoji('🥰'));
        assert!(!is_emoji('\u{25FF}'));
        assert!(!is_emoji('a'));
        assert!(!is_emoji('é'));
    }

    #[test]
    fn test_variation_selector_and_joiner_are_not_counted() {
        // "❤️" is U+2764 followed by U+FE0F; only the heart is an emoji.
        assert_eq!(extract_emojis("❤\u{FE0F}"), ["❤"]);
        // Family sequence: three people joined by U+200D.
        assert_eq!(extract_emojis("👨\u{200D}👩\u{200D}👧").len(), 3);
    }

    #[test]
    fn test_flags_are_regional_indicator_pairs() {
        assert_eq!(extract_emojis("🇺🇸"), ["🇺", "🇸"]);
    }

    #[test]
    fn test_no_emojis() {
        assert!(extract_emojis("").is_empty());
        assert!(extract_emojis("Привет мир 123").is_empty());
    }
}
