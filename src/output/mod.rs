//! Output writers.
//!
//! Message sequences:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of messages - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one message per line - requires `json-output` feature
//!
//! Statistics:
//! - [`render_report`] - human-readable text summary (always available)
//! - [`stats_to_json`] - `ChatStats` as JSON - requires `json-output` feature
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn example() -> chatstats::Result<()> {
//! use chatstats::output::{render_report, stats_to_json, to_jsonl};
//! use chatstats::{aggregate, parse_transcript};
//!
//! let messages = parse_transcript("[1/2/23, 10:00:00 AM] Alice: Hello 👋");
//! let stats = aggregate(&messages);
//!
//! let report = render_report(&stats);
//! assert!(report.contains("Total messages:"));
//!
//! let json = stats_to_json(&stats)?;
//! assert!(json.contains("\"totalMessages\": 1"));
//!
//! let jsonl = to_jsonl(&messages)?;
//! assert!(jsonl.starts_with("{\"timestamp\""));
//! # Ok(())
//! # }
//! # #[cfg(feature = "json-output")]
//! # example().unwrap();
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;
mod report;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{stats_to_json, to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
pub use report::render_report;
pub(crate) use report::join_items;
