//! campuscal: campus calendar core
//!
//! Lays out a day's events in side-by-side columns and imports events
//! from free-form chat messages.

pub mod calendar;
pub mod config;
pub mod error;
pub mod ingest;

pub use calendar::{
    events_from_records, max_concurrency, overlap_components, DayGeometry, Event, EventRecord,
    LayoutResult, OverlapLayoutEngine, Placement,
};
pub use config::Config;
pub use error::{CampusError, ConfigError, Result};
pub use ingest::{
    Category, EventCache, EventTextParser, ImportSummary, ParsedEvent, RawMessage,
};
