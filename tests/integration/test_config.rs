//! Configuration file tests.

use std::io::Write;

use campuscal::{CampusError, Config, ConfigError, DayGeometry, EventTextParser, RawMessage};
use chrono::{NaiveDate, NaiveTime};
use tempfile::NamedTempFile;

#[test]
fn test_config_file_drives_parser_and_geometry() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        [calendar]
        day_start = "06:00"
        day_width = 480.0

        [parser]
        default_start = "18:00"
        default_duration_minutes = 120
        "#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();

    let geometry = DayGeometry::from(&config.calendar);
    assert_eq!(geometry.day_start, NaiveTime::from_hms_opt(6, 0, 0).unwrap());
    assert_eq!(geometry.day_width, 480.0);

    let now = NaiveDate::from_ymd_opt(2024, 10, 16)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let event = EventTextParser::with_config(config.parser)
        .parse(&RawMessage::new("Movie screening", "C1", "films", "7"), now)
        .unwrap();
    assert_eq!(event.start_time.time(), NaiveTime::from_hms_opt(18, 0, 0).unwrap());
    assert_eq!(event.duration().num_minutes(), 120);
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, CampusError::Config(ConfigError::ReadFile(_))));
}

#[test]
fn test_malformed_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[parser\ndefault_start = 5").unwrap();
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, CampusError::Config(ConfigError::Parse(_))));
}
