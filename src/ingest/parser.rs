//! Turning chat messages into event records.
//!
//! The parser runs a fixed best-effort pipeline: triviality filter, title,
//! date, time, location, categories, assembly. Every stage has its own
//! fallback, so anything that survives the triviality filter becomes an
//! event, however low the confidence.

use chrono::{Duration, NaiveDateTime};
use tracing::debug;

use crate::config::ParserConfig;

use super::categories::infer_categories;
use super::message::{ParsedEvent, RawMessage};
use super::patterns::{extract_date, extract_location, extract_time, TimeMatch};

/// System messages that never describe an event.
const SYSTEM_MESSAGE_MARKERS: [&str; 6] = [
    "has joined the channel",
    "has left the channel",
    "set the channel topic",
    "set the channel purpose",
    "set the channel description",
    "renamed the channel",
];

/// Length forced onto a degenerate or inverted time range.
const CORRECTED_RANGE_MINUTES: i64 = 60;

/// Tag added to every event imported from chat.
pub const SOURCE_TAG: &str = "slack";

// ============================================================================
// Event Text Parser
// ============================================================================

/// Extracts events from free-form chat messages.
#[derive(Debug, Clone, Default)]
pub struct EventTextParser {
    config: ParserConfig,
}

impl EventTextParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with specific settings.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The active settings.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse one message.
    ///
    /// Returns `None` only for blank text and channel system messages.
    /// `now` anchors the fallback date (the day after `now`) and the
    /// default year for month-name dates.
    pub fn parse(&self, message: &RawMessage, now: NaiveDateTime) -> Option<ParsedEvent> {
        let text = message.text.trim();
        if is_trivial(text) {
            return None;
        }

        let id = ParsedEvent::id_for(&message.channel_id, &message.timestamp_id);
        let default_duration = Duration::minutes(i64::from(self.config.default_duration_minutes));

        let today = now.date();
        let date = extract_date(text, today).unwrap_or_else(|| {
            today
                .checked_add_signed(Duration::days(1))
                .unwrap_or(today)
        });

        let (start_time, end_time) = match extract_time(text) {
            Some(TimeMatch::Range { start, end }) => (date.and_time(start), date.and_time(end)),
            Some(TimeMatch::Single(start)) => {
                let start = date.and_time(start);
                (start, start + default_duration)
            }
            None => {
                let start = date.and_time(self.config.default_start);
                (start, start + default_duration)
            }
        };

        let end_time = if end_time <= start_time {
            debug!(
                "Corrected time range for {}: {} -> {} became {} minutes",
                id, start_time, end_time, CORRECTED_RANGE_MINUTES
            );
            start_time + Duration::minutes(CORRECTED_RANGE_MINUTES)
        } else {
            end_time
        };

        Some(ParsedEvent {
            title: extract_title(text, self.config.title_max_chars),
            description: message.text.clone(),
            start_time,
            end_time,
            location: extract_location(text).unwrap_or_default(),
            categories: infer_categories(text),
            organizer_name: organizer_name(message),
            tags: vec![
                SOURCE_TAG.to_string(),
                message.bare_channel_name().to_string(),
            ],
            id,
        })
    }
}

/// Blank text or a channel system message.
pub fn is_trivial(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return true;
    }
    let lower = text.to_lowercase();
    SYSTEM_MESSAGE_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
}

/// First non-empty line, cut to `max_chars` characters.
fn extract_title(text: &str, max_chars: usize) -> String {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .chars()
        .take(max_chars)
        .collect()
}

/// Display name, then author id, then the channel.
fn organizer_name(message: &RawMessage) -> String {
    non_blank(message.author_display_name.as_deref())
        .or_else(|| non_blank(message.author_id.as_deref()))
        .map(String::from)
        .unwrap_or_else(|| format!("#{}", message.bare_channel_name()))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
