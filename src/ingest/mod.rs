//! Event import from chat messages.
//!
//! - **Parser**: extract a best-guess date, time range, location, and
//!   categories from one message
//! - **Patterns**: the individual date/time/location extractors
//! - **Cache**: the service-side store that deduplicates by event id
//!
//! # Usage
//!
//! ```
//! use campuscal::ingest::{EventTextParser, RawMessage};
//! use chrono::NaiveDate;
//!
//! let now = NaiveDate::from_ymd_opt(2024, 9, 20).unwrap().and_hms_opt(10, 0, 0).unwrap();
//! let message = RawMessage::new("Pizza night at The Cut 6-8pm", "C42", "events", "1726800000.0001");
//!
//! let event = EventTextParser::new().parse(&message, now).unwrap();
//! assert_eq!(event.location, "The Cut");
//! ```

mod cache;
mod categories;
mod message;
mod parser;
pub mod patterns;

pub use cache::{EventCache, ImportSummary};
pub use categories::infer_categories;
pub use message::{Category, ParsedEvent, RawMessage};
pub use parser::{is_trivial, EventTextParser, SOURCE_TAG};
