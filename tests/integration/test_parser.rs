//! Message parsing and import tests.

use campuscal::{Category, EventCache, EventTextParser, OverlapLayoutEngine, RawMessage};
use chrono::{Duration, NaiveDate, NaiveDateTime};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 10, 16)
        .unwrap()
        .and_hms_opt(11, 15, 0)
        .unwrap()
}

fn on(mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

fn message(text: &str, ts: &str) -> RawMessage {
    RawMessage::new(text, "C0EVENTS", "#campus-events", ts)
}

#[test]
fn test_empty_and_system_messages_are_not_events() {
    let parser = EventTextParser::new();
    assert!(parser.parse(&message("", "1"), now()).is_none());
    assert!(parser
        .parse(&message("has joined the channel", "2"), now())
        .is_none());
}

#[test]
fn test_pizza_night_example() {
    let event = EventTextParser::new()
        .parse(&message("Pizza night at The Cut 6-8pm", "3"), now())
        .unwrap();

    assert!(event.location.contains("The Cut"));
    assert_eq!(event.start_time, on(10, 17, 18, 0));
    assert_eq!(event.end_time, on(10, 17, 20, 0));
    assert!(event.categories.contains(&Category::Food));
}

#[test]
fn test_parsing_is_idempotent() {
    let parser = EventTextParser::new();
    let msg = message("Hack night Oct 18 7-11pm @ Gross Hall", "1729090000.000200");
    let first = parser.parse(&msg, now()).unwrap();
    let second = parser.parse(&msg.clone(), now()).unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first, second);
}

#[test]
fn test_inverted_range_forced_to_one_hour() {
    let event = EventTextParser::new()
        .parse(&message("Chess club 5pm - 4pm", "4"), now())
        .unwrap();
    assert_eq!(event.end_time, event.start_time + Duration::hours(1));
}

#[test]
fn test_no_date_or_time_defaults_to_tomorrow_noon() {
    let event = EventTextParser::new()
        .parse(&message("Who wants to start a book exchange?", "5"), now())
        .unwrap();
    assert_eq!(event.start_time, on(10, 17, 12, 0));
    assert_eq!(event.end_time, on(10, 17, 13, 0));
}

#[test]
fn test_multiline_announcement() {
    let text = "*Fall Career Fair*\n\
                Date: 10/24/24\n\
                Time: 10am - 2pm\n\
                Location: Cameron Indoor Stadium\n\
                Bring your resume! Free snacks for early arrivals.";
    let event = EventTextParser::new()
        .parse(
            &message(text, "1729100000.000300").with_author_name("Career Center"),
            now(),
        )
        .unwrap();

    assert_eq!(event.title, "*Fall Career Fair*");
    assert_eq!(event.start_time, on(10, 24, 10, 0));
    assert_eq!(event.end_time, on(10, 24, 14, 0));
    assert_eq!(event.location, "Cameron Indoor Stadium");
    assert_eq!(event.categories, vec![Category::Career, Category::Food]);
    assert_eq!(event.organizer_name, "Career Center");
    assert_eq!(event.tags, vec!["slack", "campus-events"]);
    assert_eq!(event.id, "slack-C0EVENTS-1729100000.000300");
}

#[test]
fn test_imported_events_feed_the_layout() {
    let messages = vec![
        message("Yoga on the lawn Oct 20 9-10am", "10"),
        message("Brunch social Oct 20 9:30am-11", "11"),
        message("Oct 20 noon concert at the chapel", "12"),
        message("has left the channel", "13"),
    ];

    let mut cache = EventCache::new();
    let summary = cache.import(&EventTextParser::new(), &messages, now());
    assert_eq!(summary.inserted, 3);
    assert_eq!(summary.skipped, 1);

    let events: Vec<_> = cache.events_sorted().iter().map(|e| e.to_event()).collect();
    let results = OverlapLayoutEngine::new().layout(&events);

    let widths: Vec<usize> = results.iter().map(|r| r.total_columns).collect();
    assert_eq!(widths, vec![2, 2, 1]);
}
