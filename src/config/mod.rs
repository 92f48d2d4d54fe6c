//! Configuration loading.

mod settings;

pub use settings::{CalendarConfig, Config, LoggingConfig, ParserConfig};
