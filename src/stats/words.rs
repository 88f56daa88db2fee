//! Word tokenization for the word-frequency ranking.
//!
//! Tokenization is ASCII-only: after lower-casing, anything that
//! is not an ASCII letter or digit becomes a separator. URLs and phone-number
//! runs are deleted first; a phone run swallows its surrounding spaces, so
//! the words on either side join.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Shortest kept token is 3 characters.
const MIN_WORD_LEN: usize = 3;
/// Longest kept token is 19 characters.
const MAX_WORD_LEN: usize = 19;

static URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("URL pattern must compile"));

/// Runs of 10+ digits, spaces, hyphens or parentheses, with an optional leading `+`.
static PHONE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?[0-9\s\-()]{10,}").expect("phone pattern must compile"));

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s]").expect("separator pattern must compile"));

/// Common English function words and chat noise.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "and", "you", "are", "but", "with", "this", "that", "for", "was", "have", "has",
        "from", "not", "can", "will", "would", "could", "should", "just", "like", "know", "get",
        "got", "now", "one", "way", "all", "any", "may", "say", "she", "her", "him", "his", "how",
        "its", "our", "out", "day", "use", "man", "new", "see", "two", "who", "boy", "did", "don",
        "let", "put", "too", "old", "why", "yes", "yet", "come", "what",
        // chat noise
        "omitted", "sticker", "image", "video", "audio", "message", "call", "missed", "voice",
        "haha", "hehe", "lol", "okay", "yeah", "yep", "nah", "hmm", "ohh", "ahh", "wow", "hey",
        "bye", "thanks",
    ]
    .into_iter()
    .collect()
});

/// Returns `true` if `word` (lower-case) is excluded from the word ranking.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Splits a message body into countable words.
///
/// # Example
///
/// ```rust
/// use chatstats::stats::tokenize_words;
///
/// let words = tokenize_words("Pizza tonight? Call +1 (555) 123-4567 or see https://x.io/menu");
/// assert_eq!(words, ["pizza", "tonight"]);
/// ```
pub fn tokenize_words(body: &str) -> Vec<String> {
    let lowered = body.to_lowercase();
    let without_urls = URL.replace_all(&lowered, "");
    let without_phones = PHONE_NUMBER.replace_all(&without_urls, "");
    let cleaned = NON_ALPHANUMERIC.replace_all(&without_phones, " ");

    cleaned
        .split_whitespace()
        .filter(|word| is_countable(word))
        .map(str::to_owned)
        .collect()
}

fn is_countable(word: &str) -> bool {
    (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len())
        && !word.bytes().all(|b| b.is_ascii_digit())
        && !is_stopword(word)
}
