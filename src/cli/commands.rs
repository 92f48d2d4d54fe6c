//! Command handlers.

use std::path::Path;

use anyhow::{Context, Result};
use campuscal::calendar::parse_timestamp;
use campuscal::{
    events_from_records, Config, DayGeometry, EventCache, EventRecord, EventTextParser,
    OverlapLayoutEngine, RawMessage,
};
use chrono::NaiveDateTime;

use super::output;
use super::types::{ImportReport, LayoutReport};

/// Arguments for the parse command.
#[derive(Debug, Clone)]
pub struct ParseArgs {
    pub text: String,
    pub channel_id: String,
    pub channel_name: String,
    pub timestamp_id: String,
    pub author: Option<String>,
    pub now: Option<String>,
}

/// Run the layout command.
pub fn run_layout(config: &Config, input: &Path, json_output: bool) -> Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("reading events from {}", input.display()))?;
    let records: Vec<EventRecord> = serde_json::from_str(&content)?;
    let events = events_from_records(records)?;

    let results = OverlapLayoutEngine::new().layout(&events);
    let placements = DayGeometry::from(&config.calendar).place_all(&events, &results);

    output::print_layout(&LayoutReport { results, placements }, json_output)
}

/// Run the parse command.
pub fn run_parse(config: &Config, args: ParseArgs, json_output: bool) -> Result<()> {
    let now = resolve_now(args.now.as_deref())?;
    let mut message = RawMessage::new(args.text, args.channel_id, args.channel_name, args.timestamp_id);
    if let Some(author) = args.author {
        message = message.with_author_name(author);
    }

    let parser = EventTextParser::with_config(config.parser.clone());
    output::print_parsed(parser.parse(&message, now).as_ref(), json_output)
}

/// Run the import command.
pub fn run_import(
    config: &Config,
    input: &Path,
    now: Option<String>,
    json_output: bool,
) -> Result<()> {
    let now = resolve_now(now.as_deref())?;
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("reading messages from {}", input.display()))?;
    let messages: Vec<RawMessage> = serde_json::from_str(&content)?;

    let parser = EventTextParser::with_config(config.parser.clone());
    let mut cache = EventCache::new();
    let summary = cache.import(&parser, &messages, now);
    let events = cache.events_sorted().into_iter().cloned().collect();

    output::print_import(&ImportReport { summary, events }, json_output)
}

fn resolve_now(raw: Option<&str>) -> Result<NaiveDateTime> {
    match raw {
        Some(raw) => {
            parse_timestamp(raw).with_context(|| format!("--now is not a timestamp: {raw}"))
        }
        None => Ok(chrono::Local::now().naive_local()),
    }
}
