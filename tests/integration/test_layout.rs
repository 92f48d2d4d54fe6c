//! Day layout tests against a brute-force reference.

use std::collections::HashMap;

use campuscal::{
    events_from_records, max_concurrency, overlap_components, DayGeometry, Event, EventRecord,
    LayoutResult, OverlapLayoutEngine,
};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

fn day_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 10, 7)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

fn at(h: u32, m: u32) -> NaiveDateTime {
    day_start().date().and_hms_opt(h, m, 0).unwrap()
}

/// Events on a 15-minute grid; some zero-length, some inverted.
fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((0i64..40, -2i64..12), 0..24).prop_map(|slots| {
        slots
            .into_iter()
            .enumerate()
            .map(|(i, (start, len))| {
                let start = day_start() + Duration::minutes(start * 15);
                Event::new(format!("e{i:02}"), start, start + Duration::minutes(len * 15))
            })
            .collect()
    })
}

fn reference_end(event: &Event) -> NaiveDateTime {
    if event.end_time > event.start_time {
        event.end_time
    } else {
        event.start_time + Duration::minutes(1)
    }
}

fn simultaneous(a: &Event, b: &Event) -> bool {
    a.start_time.max(b.start_time) < reference_end(a).min(reference_end(b))
}

/// Components by pairwise transitive closure.
fn reference_components(events: &[Event]) -> Vec<usize> {
    let mut label: Vec<usize> = (0..events.len()).collect();
    let mut changed = true;
    while changed {
        changed = false;
        for i in 0..events.len() {
            for j in 0..events.len() {
                if simultaneous(&events[i], &events[j]) && label[j] < label[i] {
                    label[i] = label[j];
                    changed = true;
                }
            }
        }
    }
    label
}

/// Peak number of events covering any boundary instant of the component.
fn reference_width(events: &[Event], members: &[usize]) -> usize {
    members
        .iter()
        .flat_map(|&i| [events[i].start_time, reference_end(&events[i])])
        .map(|instant| {
            members
                .iter()
                .filter(|&&j| events[j].is_active_at(instant))
                .count()
        })
        .max()
        .unwrap_or(0)
}

fn by_id(results: &[LayoutResult]) -> HashMap<String, (usize, usize)> {
    results
        .iter()
        .map(|r| (r.event_id.clone(), (r.column, r.total_columns)))
        .collect()
}

proptest! {
    #[test]
    fn columns_stay_inside_width(events in arb_events()) {
        let results = OverlapLayoutEngine::new().layout(&events);
        prop_assert_eq!(results.len(), events.len());
        for r in &results {
            prop_assert!(r.total_columns >= 1);
            prop_assert!(r.column < r.total_columns);
        }
    }

    #[test]
    fn simultaneous_events_never_share_a_column(events in arb_events()) {
        let results = OverlapLayoutEngine::new().layout(&events);
        for i in 0..events.len() {
            for j in (i + 1)..events.len() {
                if simultaneous(&events[i], &events[j]) {
                    prop_assert_ne!(results[i].column, results[j].column);
                }
            }
        }
    }

    #[test]
    fn width_matches_brute_force_peak(events in arb_events()) {
        let results = OverlapLayoutEngine::new().layout(&events);
        let labels = reference_components(&events);

        for label in 0..events.len() {
            let members: Vec<usize> = (0..events.len()).filter(|&i| labels[i] == label).collect();
            if members.is_empty() {
                continue;
            }
            let expected = reference_width(&events, &members);
            for &i in &members {
                prop_assert_eq!(results[i].total_columns, expected);
            }
        }
        prop_assert_eq!(overlap_components(&events).len(), {
            let mut distinct = labels.clone();
            distinct.sort_unstable();
            distinct.dedup();
            distinct.len()
        });
    }

    #[test]
    fn result_ignores_input_order(events in arb_events()) {
        let engine = OverlapLayoutEngine::new();
        let forward = by_id(&engine.layout(&events));

        let mut reversed = events.clone();
        reversed.reverse();
        prop_assert_eq!(forward, by_id(&engine.layout(&reversed)));
    }
}

#[test]
fn test_two_overlapping_and_one_separate() {
    let events = vec![
        Event::new("A", at(9, 0), at(10, 0)),
        Event::new("B", at(9, 30), at(10, 30)),
        Event::new("C", at(11, 0), at(12, 0)),
    ];
    let results = by_id(&OverlapLayoutEngine::new().layout(&events));

    assert_eq!(results["A"].1, 2);
    assert_eq!(results["B"].1, 2);
    assert_ne!(results["A"].0, results["B"].0);
    assert_eq!(results["C"], (0, 1));
}

#[test]
fn test_three_mutually_overlapping() {
    let events: Vec<Event> = ["A", "B", "C"]
        .iter()
        .map(|id| Event::new(*id, at(9, 0), at(10, 0)))
        .collect();
    let results = OverlapLayoutEngine::new().layout(&events);

    let columns: Vec<usize> = results.iter().map(|r| r.column).collect();
    assert_eq!(columns, vec![0, 1, 2]);
    assert!(results.iter().all(|r| r.total_columns == 3));
    assert_eq!(max_concurrency(&events), 3);
}

#[test]
fn test_back_to_back_events_share_column_zero() {
    let events = vec![
        Event::new("A", at(14, 0), at(15, 0)),
        Event::new("B", at(15, 0), at(16, 0)),
    ];
    let results = OverlapLayoutEngine::new().layout(&events);
    assert!(results.iter().all(|r| r.column == 0 && r.total_columns == 1));
}

#[test]
fn test_records_to_placements() {
    let json = r#"[
        {"id": "lecture", "start_ts": "2024-10-07T09:00:00", "end_ts": "2024-10-07T10:30:00"},
        {"id": "lab", "startTime": "2024-10-07T10:00:00Z", "endTime": "2024-10-07T11:00:00Z"},
        {"id": "lunch", "start": "2024-10-07 12:00", "end": "2024-10-07 13:00"}
    ]"#;
    let records: Vec<EventRecord> = serde_json::from_str(json).unwrap();
    let events = events_from_records(records).unwrap();
    let results = OverlapLayoutEngine::new().layout(&events);

    let geometry = DayGeometry {
        day_start: chrono::NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        pixels_per_minute: 1.0,
        day_width: 200.0,
    };
    let placements = geometry.place_all(&events, &results);

    assert_eq!(placements.len(), 3);
    assert_eq!((placements[0].top, placements[0].width), (60.0, 100.0));
    assert_eq!((placements[1].left, placements[1].width), (100.0, 100.0));
    assert_eq!((placements[2].top, placements[2].width), (240.0, 200.0));
}
