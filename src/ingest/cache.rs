//! In-memory store of imported events, keyed by event id.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::message::{ParsedEvent, RawMessage};
use super::parser::EventTextParser;

/// Counts from one import batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Messages that produced an event.
    pub parsed: usize,
    /// Messages dropped by the triviality filter.
    pub skipped: usize,
    /// Parsed events whose id was already cached (replaced in place).
    pub duplicates: usize,
    /// Parsed events added under a new id.
    pub inserted: usize,
}

/// Service-layer event store. Re-importing a message replaces the cached
/// event instead of adding a second copy.
#[derive(Debug, Clone, Default)]
pub struct EventCache {
    events: HashMap<String, ParsedEvent>,
}

impl EventCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an event. Returns `true` when the id was new.
    pub fn upsert(&mut self, event: ParsedEvent) -> bool {
        self.events.insert(event.id.clone(), event).is_none()
    }

    pub fn get(&self, id: &str) -> Option<&ParsedEvent> {
        self.events.get(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<ParsedEvent> {
        self.events.remove(id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All cached events ordered by start time, then id.
    pub fn events_sorted(&self) -> Vec<&ParsedEvent> {
        let mut events: Vec<&ParsedEvent> = self.events.values().collect();
        events.sort_by(|a, b| a.start_time.cmp(&b.start_time).then_with(|| a.id.cmp(&b.id)));
        events
    }

    /// Parse a batch of messages and upsert every resulting event.
    pub fn import(
        &mut self,
        parser: &EventTextParser,
        messages: &[RawMessage],
        now: NaiveDateTime,
    ) -> ImportSummary {
        let mut summary = ImportSummary::default();

        for message in messages {
            match parser.parse(message, now) {
                Some(event) => {
                    summary.parsed += 1;
                    if self.upsert(event) {
                        summary.inserted += 1;
                    } else {
                        summary.duplicates += 1;
                    }
                }
                None => {
                    debug!("Skipped message {} in {}", message.timestamp_id, message.channel_id);
                    summary.skipped += 1;
                }
            }
        }

        info!(
            "Imported {} messages: {} new, {} duplicate, {} skipped",
            messages.len(),
            summary.inserted,
            summary.duplicates,
            summary.skipped
        );
        summary
    }
}
