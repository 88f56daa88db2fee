//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::fs;
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chatstats::cli::Args;
use chatstats::format::{ReportFormat, write_to_format};
use chatstats::insight::InsightContext;
use chatstats::output::{render_report, stats_to_json};
use chatstats::{ChatstatsError, TranscriptParser, aggregate_with};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.log_level());

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("chatstats={default_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: &Args) -> Result<(), ChatstatsError> {
    let total_start = Instant::now();

    let text = read_transcript(&args.input, args.max_size)?;

    let parse_start = Instant::now();
    let parser = TranscriptParser::with_config(args.parser_config());
    let (messages, summary) = parser.parse_with_summary(&text);
    info!(
        messages = messages.len(),
        system_messages = summary.system_messages,
        elapsed_ms = parse_start.elapsed().as_millis(),
        "parsed {}",
        args.input.display()
    );

    if messages.is_empty() {
        return Err(ChatstatsError::no_messages(Some(args.input.clone())));
    }

    let stats = aggregate_with(&messages, &args.stats_config());

    if let Some(path) = &args.messages {
        let format = args.messages_format();
        let limit = args.sample.unwrap_or(messages.len()).min(messages.len());
        write_to_format(&messages[..limit], path, format)?;
        info!(count = limit, %format, "exported messages to {}", path.display());
    }

    let rendered = if args.insight_context {
        let mut context = InsightContext::new(&stats).with_messages(&messages);
        if let Some(question) = &args.question {
            context = context.with_question(question.as_str());
        }
        context.render()
    } else {
        match ReportFormat::from(args.format) {
            ReportFormat::Text => render_report(&stats),
            ReportFormat::Json => {
                let mut json = stats_to_json(&stats)?;
                json.push('\n');
                json
            }
        }
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)?;
            info!("report written to {}", path.display());
        }
        None => print!("{rendered}"),
    }

    debug!(elapsed_ms = total_start.elapsed().as_millis(), "done");
    Ok(())
}

/// Reads the transcript, refusing files over `max_size` bytes.
fn read_transcript(path: &Path, max_size: u64) -> Result<String, ChatstatsError> {
    let size = fs::metadata(path)?.len();
    if size > max_size {
        return Err(ChatstatsError::input_too_large(max_size, size));
    }

    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|source| ChatstatsError::Utf8 {
        context: path.display().to_string(),
        source,
    })
}
