//! Day-view calendar layout.
//!
//! This module turns a flat list of one day's events into renderable
//! columns:
//!
//! - **Layout**: assign each event a column and a shared column count so
//!   overlapping events sit side by side and free columns get reused
//! - **Geometry**: convert column assignments into pixel rectangles
//! - **Records**: normalize loosely-shaped event records at the boundary
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  EventRecord (startTime / start_ts / start ...)          │
//! │                 │  Event::try_from                       │
//! │                 ▼                                        │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │  OverlapLayoutEngine                               │  │
//! │  │  - first-fit columns in start order                │  │
//! │  │  - per-component width by boundary sweep           │  │
//! │  └────────────────────────────────────────────────────┘  │
//! │                 │  Vec<LayoutResult>                     │
//! │                 ▼                                        │
//! │  DayGeometry::place  ->  Placement { top, left, ... }    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use campuscal::calendar::{Event, OverlapLayoutEngine};
//! use chrono::NaiveDate;
//!
//! let day = NaiveDate::from_ymd_opt(2024, 10, 7).unwrap();
//! let events = vec![
//!     Event::new("a", day.and_hms_opt(9, 0, 0).unwrap(), day.and_hms_opt(10, 0, 0).unwrap()),
//!     Event::new("b", day.and_hms_opt(9, 30, 0).unwrap(), day.and_hms_opt(10, 30, 0).unwrap()),
//! ];
//!
//! let results = OverlapLayoutEngine::new().layout(&events);
//! assert!(results.iter().all(|r| r.total_columns == 2));
//! ```

pub mod geometry;
pub mod layout;
pub mod types;

pub use geometry::{DayGeometry, Placement};
pub use layout::{max_concurrency, overlap_components, OverlapLayoutEngine};
pub use types::{events_from_records, parse_timestamp, Event, EventRecord, LayoutResult};
