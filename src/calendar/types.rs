//! Calendar types for the day-view layout.
//!
//! [`Event`] is the only shape the layout engine reads. Loosely-shaped
//! records coming from storage or the frontend go through [`EventRecord`]
//! first, which accepts the field-name variants seen in the wild and
//! normalizes the timestamps.

use chrono::{DateTime, Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{CampusError, Result};

/// Effective length, in minutes, given to zero-length or inverted events.
pub const MIN_EVENT_MINUTES: i64 = 1;

// ============================================================================
// Event
// ============================================================================

/// A read-only event with a wall-clock time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier.
    pub id: String,
    /// Start of the event.
    pub start_time: NaiveDateTime,
    /// End of the event. Callers should keep this after `start_time`,
    /// but the layout engine tolerates anything.
    pub end_time: NaiveDateTime,
}

impl Event {
    /// Create a new event.
    pub fn new(id: impl Into<String>, start_time: NaiveDateTime, end_time: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            start_time,
            end_time,
        }
    }

    /// End used for overlap checks: `start + 1 minute` when the range is
    /// empty or inverted.
    pub fn effective_end(&self) -> NaiveDateTime {
        if self.end_time > self.start_time {
            self.end_time
        } else {
            self.start_time + Duration::minutes(MIN_EVENT_MINUTES)
        }
    }

    /// Strict interval intersection. Touching endpoints do not overlap.
    pub fn overlaps_with(&self, other: &Event) -> bool {
        self.start_time < other.effective_end() && other.start_time < self.effective_end()
    }

    /// Whether the event is active at `instant` (half-open range).
    pub fn is_active_at(&self, instant: NaiveDateTime) -> bool {
        self.start_time <= instant && instant < self.effective_end()
    }
}

/// Column assignment for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    /// Id of the event this result belongs to.
    pub event_id: String,
    /// Zero-based column index.
    pub column: usize,
    /// Number of columns shared by the event's overlap component.
    pub total_columns: usize,
}

// ============================================================================
// Boundary adapter
// ============================================================================

/// A loosely-shaped event record as produced by storage rows or frontend
/// state, normalized into an [`Event`] with `Event::try_from`.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(
        default,
        alias = "startTime",
        alias = "start_ts",
        alias = "start",
        alias = "startDate"
    )]
    pub start_time: Option<serde_json::Value>,
    #[serde(
        default,
        alias = "endTime",
        alias = "end_ts",
        alias = "end",
        alias = "endDate"
    )]
    pub end_time: Option<serde_json::Value>,
}

impl TryFrom<EventRecord> for Event {
    type Error = CampusError;

    fn try_from(record: EventRecord) -> Result<Self> {
        let id = match record.id {
            Some(serde_json::Value::String(s)) if !s.is_empty() => s,
            Some(serde_json::Value::Number(n)) => n.to_string(),
            _ => return Err(CampusError::InvalidEvent("missing id".to_string())),
        };
        let start_time = record
            .start_time
            .as_ref()
            .and_then(parse_timestamp_value)
            .ok_or_else(|| CampusError::InvalidEvent(format!("{id}: missing or bad start time")))?;
        let end_time = record
            .end_time
            .as_ref()
            .and_then(parse_timestamp_value)
            .ok_or_else(|| CampusError::InvalidEvent(format!("{id}: missing or bad end time")))?;

        Ok(Event {
            id,
            start_time,
            end_time,
        })
    }
}

/// Convert a batch of records, failing on the first bad one.
pub fn events_from_records(records: Vec<EventRecord>) -> Result<Vec<Event>> {
    records.into_iter().map(Event::try_from).collect()
}

fn parse_timestamp_value(value: &serde_json::Value) -> Option<NaiveDateTime> {
    match value {
        serde_json::Value::String(s) => parse_timestamp(s),
        serde_json::Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.naive_utc()),
        _ => None,
    }
}

/// Parse a timestamp string.
///
/// RFC 3339 values keep their wall-clock part (the offset is dropped);
/// naive ISO values with `T` or a space separator are taken as-is.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}
