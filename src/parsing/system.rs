//! Detection of client-generated notifications.
//!
//! Chat clients write calls, omitted media, membership changes, encryption
//! notices and deletions into the export as if they were ordinary messages.
//! iOS exports put a U+200E mark in front of these lines, so the catalog
//! phrases only count when the mark is present. Android writes a few fixed
//! bodies without any mark; those are matched at the start of the text.
//! A header line recognized either way is discarded in full.

/// Notifications matched as case-sensitive substrings of marked text.
pub const SYSTEM_EVENTS: &[&str] = &[
    // Calls
    "Voice call",
    "Video call",
    "Missed voice call",
    "Missed video call",
    "Missed group voice call",
    "Missed group video call",
    // Omitted media
    "image omitted",
    "video omitted",
    "audio omitted",
    "sticker omitted",
    "document omitted",
    "Contact card omitted",
    "GIF omitted",
    "location:",
    // Membership and group changes
    "created group",
    "created this group",
    "changed the subject",
    "changed this group's icon",
    "changed the group description",
    "deleted this group's icon",
    "joined using this group's invite link",
    "changed their phone number",
    "is now an admin",
    "You're now an admin",
    "turned on disappearing messages",
    "turned off disappearing messages",
    " added ",
    " removed ",
    // Encryption and security
    "Messages and calls are end-to-end encrypted",
    "security code changed",
    "Your security code with",
    // Deletions
    "This message was deleted",
    "You deleted this message",
];

/// Unmarked bodies written by Android clients, matched as prefixes.
pub const UNMARKED_EVENTS: &[&str] = &[
    "<Media omitted>",
    "This message was deleted",
    "You deleted this message",
    "location: https://maps.google.com",
];

const CLIENT_MARK: char = '\u{200E}';

/// Returns `true` if the message text is a client-generated notification.
///
/// # Example
///
/// ```rust
/// use chatstats::parsing::is_system_message;
///
/// assert!(is_system_message("\u{200E}image omitted"));
/// assert!(is_system_message("<Media omitted>"));
/// assert!(!is_system_message("Voice call later?"));
/// ```
pub fn is_system_message(remainder: &str) -> bool {
    if UNMARKED_EVENTS.iter().any(|event| remainder.starts_with(event)) {
        return true;
    }

    remainder.contains(CLIENT_MARK)
        && (SYSTEM_EVENTS.iter().any(|event| remainder.contains(event))
            || remainder.trim_end().ends_with(" left"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_placeholders() {
        for text in [
            "\u{200E}image omitted",
            "\u{200E}video omitted",
            "\u{200E}audio omitted",
            "\u{200E}sticker omitted",
            "\u{200E}document omitted",
            "\u{200E}Contact card omitted",
            "\u{200E}GIF omitted",
            "<Media omitted>",
            "\u{200E}location: https://maps.google.com/?q=1,2",
            "report.pdf • 3 pages \u{200E}document omitted",
        ] {
            assert!(is_system_message(text), "text: {text:?}");
        }
    }

    #[test]
    fn test_calls() {
        assert!(is_system_message("\u{200E}Voice call, \u{200E}12 min"));
        assert!(is_system_message("\u{200E}Missed video call"));
        assert!(is_system_message("\u{200E}Missed group voice call"));
    }

    #[test]
    fn test_encryption_and_deletion() {
        assert!(is_system_message(
            "\u{200E}Messages and calls are end-to-end encrypted. No one outside of this chat can read them."
        ));
        assert!(is_system_message("\u{200E}Your security code with Bob changed."));
        assert!(is_system_message("\u{200E}This message was deleted."));
        assert!(is_system_message("You deleted this message"));
    }

    #[test]
    fn test_group_events() {
        assert!(is_system_message("\u{200E}Alice created group \"Trip\""));
        assert!(is_system_message("\u{200E}Bob changed the subject to \"Trip 2\""));
        assert!(is_system_message("\u{200E}Alice changed this group's icon"));
        assert!(is_system_message("\u{200E}Alice added Bob"));
        assert!(is_system_message("\u{200E}Charlie left"));
        assert!(is_system_message("\u{200E}Alice removed Charlie"));
    }

    #[test]
    fn test_membership_verbs_need_the_client_mark() {
        assert!(!is_system_message("I added sugar to the tea"));
        assert!(!is_system_message("She left early"));
        assert!(!is_system_message("the stain was removed easily"));
    }

    #[test]
    fn test_unmarked_phrases_are_user_text() {
        for text in [
            "he changed the subject again",
            "I created group for the trip",
            "Voice call later?",
            "the image omitted a detail",
            "who is now an admin here?",
            "my location: home",
        ] {
            assert!(!is_system_message(text), "text: {text:?}");
        }
    }

    #[test]
    fn test_android_bodies_need_no_mark() {
        assert!(is_system_message("<Media omitted>"));
        assert!(is_system_message("This message was deleted"));
        assert!(is_system_message("location: https://maps.google.com/?q=1,2"));
        assert!(!is_system_message("why is <Media omitted> showing up"));
    }

    #[test]
    fn test_ordinary_messages() {
        assert!(!is_system_message("Hello everyone!"));
        assert!(!is_system_message(""));
        assert!(!is_system_message("see the image I sent yesterday"));
        assert!(!is_system_message("let's do a video call tomorrow"));
    }
}
