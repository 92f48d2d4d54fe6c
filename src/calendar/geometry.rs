//! Pixel placement for the day view.
//!
//! The layout engine only knows columns; this turns a column assignment
//! into a rectangle for a renderer.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::config::CalendarConfig;

use super::types::{Event, LayoutResult};

/// Vertical scale and horizontal extent of one day column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayGeometry {
    /// Wall-clock time at the top edge.
    pub day_start: NaiveTime,
    /// Vertical pixels per minute.
    pub pixels_per_minute: f64,
    /// Total width available to the day.
    pub day_width: f64,
}

/// A positioned rectangle for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub event_id: String,
    pub top: f64,
    pub height: f64,
    pub left: f64,
    pub width: f64,
}

impl Default for DayGeometry {
    fn default() -> Self {
        Self::from(&CalendarConfig::default())
    }
}

impl From<&CalendarConfig> for DayGeometry {
    fn from(config: &CalendarConfig) -> Self {
        Self {
            day_start: config.day_start,
            pixels_per_minute: config.pixels_per_minute,
            day_width: config.day_width,
        }
    }
}

impl DayGeometry {
    /// Place an event given its layout result.
    ///
    /// Events that start before `day_start` get a negative `top`; clipping
    /// is left to the renderer.
    pub fn place(&self, event: &Event, layout: &LayoutResult) -> Placement {
        let day_origin = event.start_time.date().and_time(self.day_start);
        let offset_minutes = (event.start_time - day_origin).num_minutes() as f64;
        let duration_minutes = (event.effective_end() - event.start_time)
            .num_minutes()
            .max(1) as f64;
        let width = self.day_width / layout.total_columns.max(1) as f64;

        Placement {
            event_id: event.id.clone(),
            top: offset_minutes * self.pixels_per_minute,
            height: duration_minutes * self.pixels_per_minute,
            left: layout.column as f64 * width,
            width,
        }
    }

    /// Place every event. `layout` must be the engine's output for
    /// `events`, which is one result per event in input order.
    pub fn place_all(&self, events: &[Event], layout: &[LayoutResult]) -> Vec<Placement> {
        debug_assert_eq!(events.len(), layout.len());
        events
            .iter()
            .zip(layout)
            .map(|(event, result)| self.place(event, result))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::OverlapLayoutEngine;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 10, 7)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn geometry() -> DayGeometry {
        DayGeometry {
            day_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            pixels_per_minute: 2.0,
            day_width: 300.0,
        }
    }

    #[test]
    fn test_place_side_by_side() {
        let events = vec![
            Event::new("a", at(9, 0), at(10, 0)),
            Event::new("b", at(9, 30), at(10, 30)),
        ];
        let layout = OverlapLayoutEngine::new().layout(&events);
        let placements = geometry().place_all(&events, &layout);

        assert_eq!(placements[0].top, 120.0);
        assert_eq!(placements[0].height, 120.0);
        assert_eq!(placements[0].width, 150.0);
        assert_eq!(placements[0].left, 0.0);
        assert_eq!(placements[1].top, 180.0);
        assert_eq!(placements[1].left, 150.0);
    }

    #[test]
    fn test_duplicate_ids_keep_their_own_geometry() {
        let events = vec![
            Event::new("dup", at(9, 0), at(10, 0)),
            Event::new("dup", at(13, 0), at(13, 30)),
        ];
        let layout = OverlapLayoutEngine::new().layout(&events);
        let placements = geometry().place_all(&events, &layout);

        assert_eq!(placements[0].top, 120.0);
        assert_eq!(placements[1].top, 600.0);
        assert_eq!(placements[1].height, 60.0);
    }

    #[test]
    fn test_event_before_day_start() {
        let event = Event::new("early", at(7, 30), at(8, 30));
        let result = LayoutResult {
            event_id: "early".to_string(),
            column: 0,
            total_columns: 1,
        };
        let placement = geometry().place(&event, &result);
        assert_eq!(placement.top, -60.0);
        assert_eq!(placement.width, 300.0);
    }

    #[test]
    fn test_zero_length_event_has_height() {
        let event = Event::new("p", at(9, 0), at(9, 0));
        let result = LayoutResult {
            event_id: "p".to_string(),
            column: 0,
            total_columns: 1,
        };
        assert_eq!(geometry().place(&event, &result).height, 2.0);
    }
}
