//! Tests for output writers (JSON, JSONL, CSV) and the format dispatch

use chatstats::format::{OutputFormat, to_format_string, write_to_format};
use chatstats::output::{render_report, stats_to_json, write_csv, write_json, write_jsonl};
use chatstats::{ParsedMessage, aggregate, parse_transcript};
use std::fs;
use tempfile::tempdir;

fn sample_messages() -> Vec<ParsedMessage> {
    parse_transcript(
        "[1/15/24, 10:30:00 AM] Alice: Hello! 👋\n\
         [1/15/24, 10:31:00 AM] Bob: Hi Alice; how are you?\n\
         fine \"quotes\" here\n\
         [1/15/24, 10:32:00 AM] Alice: 🎉🎉",
    )
}

// ============================================================================
// JSON Writer Tests
// ============================================================================

mod json_writer_tests {
    use super::*;

    #[test]
    fn test_write_json_basic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.json");

        write_json(&sample_messages(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: Vec<ParsedMessage> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, sample_messages());
    }

    #[test]
    fn test_deserialized_emojis_follow_body() {
        // The emoji list is derived from the body, whatever the input says.
        let json = r#"[{"timestamp":"t","sender":"A","body":"hi 🎉","emojis":[]}]"#;
        let parsed: Vec<ParsedMessage> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed[0].emojis(), ["🎉"]);
    }

    #[test]
    fn test_stats_json_shape() {
        let stats = aggregate(&sample_messages());
        let value: serde_json::Value =
            serde_json::from_str(&stats_to_json(&stats).unwrap()).unwrap();

        assert_eq!(value["totalMessages"], 3);
        assert_eq!(value["conversationStarted"], "1/15/24 10:30:00 AM");
        assert_eq!(value["totalEmojis"], 3);
        assert_eq!(value["topEmojis"][0]["key"], "🎉");
        assert_eq!(value["topEmojis"][0]["count"], 2);
        assert_eq!(value["topSenders"][1]["percentage"], "33.3%");
    }
}

// ============================================================================
// JSONL Writer Tests
// ============================================================================

mod jsonl_writer_tests {
    use super::*;

    #[test]
    fn test_write_jsonl_one_line_per_message() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.jsonl");

        write_jsonl(&sample_messages(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value["sender"].is_string());
        }
    }
}

// ============================================================================
// CSV Writer Tests
// ============================================================================

mod csv_writer_tests {
    use super::*;

    #[test]
    fn test_write_csv_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.csv");

        write_csv(&sample_messages(), &path).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_path(&path)
            .unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, ["Timestamp", "Sender", "Body", "Emojis"]);

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 3);
        assert_eq!(&records[0][3], "👋");
        assert_eq!(&records[1][2], "Hi Alice; how are you?\nfine \"quotes\" here");
        assert_eq!(&records[2][3], "🎉🎉");
    }
}

// ============================================================================
// Format Dispatch Tests
// ============================================================================

mod format_dispatch_tests {
    use super::*;

    #[test]
    fn test_write_to_format_all_formats() {
        let dir = tempdir().unwrap();
        let messages = sample_messages();

        for &format in OutputFormat::all() {
            let path = dir.path().join(format!("out.{}", format.extension()));
            write_to_format(&messages, &path, format).unwrap();

            let written = fs::read_to_string(&path).unwrap();
            assert_eq!(written, to_format_string(&messages, format).unwrap(), "{format}");
        }
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");

        let err = write_to_format(&sample_messages(), &path, OutputFormat::Csv).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_unknown_extension() {
        let err = OutputFormat::from_path("out.xlsx").unwrap_err();
        assert!(err.is_invalid_format());
    }
}

// ============================================================================
// Report Tests
// ============================================================================

#[test]
fn test_render_report() {
    let report = render_report(&aggregate(&sample_messages()));
    assert!(report.contains("Total messages: 3"));
    assert!(report.contains("1. Alice - 2 messages (66.7%)"));
    assert!(report.contains("Top emojis: 🎉 (2), 👋 (1)"));
}
