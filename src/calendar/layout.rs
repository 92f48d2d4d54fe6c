//! Side-by-side column layout for overlapping events in a day view.
//!
//! Events are placed greedily into the first free column (interval graph
//! coloring in start order), then every event in a connected overlap
//! component is given the same width: the peak number of events active at
//! one instant inside that component.

use std::cmp::Ordering;

use tracing::debug;

use super::types::{Event, LayoutResult};

// ============================================================================
// Layout Engine
// ============================================================================

/// Assigns `(column, total_columns)` pairs to the events of one day.
///
/// The engine is stateless; one instance can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlapLayoutEngine;

impl OverlapLayoutEngine {
    /// Create a new layout engine.
    pub fn new() -> Self {
        Self
    }

    /// Lay out `events`, returning one result per event in input order.
    ///
    /// Touching events (`a.end == b.start`) do not overlap and may share a
    /// column. Zero-length and inverted events are treated as one minute
    /// long. The result depends only on the set of events, not on their
    /// order in the slice.
    pub fn layout(&self, events: &[Event]) -> Vec<LayoutResult> {
        if events.is_empty() {
            return Vec::new();
        }

        let order = chronological_order(events);
        let columns = assign_columns(events, &order);

        let mut widths = vec![1usize; events.len()];
        let components = component_indices(events, &order);
        let mut widest = 0;
        for component in &components {
            let width = peak_concurrency(component.iter().map(|&i| &events[i]));
            widest = widest.max(width);
            for &i in component {
                debug_assert!(columns[i] < width, "column outside component width");
                widths[i] = width;
            }
        }

        debug!(
            "Laid out {} events in {} overlap components (widest: {})",
            events.len(),
            components.len(),
            widest
        );

        events
            .iter()
            .enumerate()
            .map(|(i, event)| LayoutResult {
                event_id: event.id.clone(),
                column: columns[i],
                total_columns: widths[i],
            })
            .collect()
    }
}

/// Connected overlap components as lists of event ids, in chronological order.
///
/// Overlap is transitive here: if A overlaps B and B overlaps C, all three
/// share a component even when A and C never meet.
pub fn overlap_components(events: &[Event]) -> Vec<Vec<String>> {
    let order = chronological_order(events);
    component_indices(events, &order)
        .into_iter()
        .map(|component| {
            component
                .into_iter()
                .map(|i| events[i].id.clone())
                .collect()
        })
        .collect()
}

/// Largest number of events active at the same instant.
pub fn max_concurrency(events: &[Event]) -> usize {
    peak_concurrency(events.iter())
}

// ============================================================================
// Helpers
// ============================================================================

/// Indices sorted by start ascending, then longer first, then id, then
/// input position.
fn chronological_order(events: &[Event]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..events.len()).collect();
    order.sort_by(|&a, &b| compare_for_layout(&events[a], &events[b]).then(a.cmp(&b)));
    order
}

fn compare_for_layout(a: &Event, b: &Event) -> Ordering {
    a.start_time
        .cmp(&b.start_time)
        .then_with(|| b.effective_end().cmp(&a.effective_end()))
        .then_with(|| a.id.cmp(&b.id))
}

/// First-fit column assignment. A column is free when its most recently
/// placed event does not overlap the candidate.
fn assign_columns(events: &[Event], order: &[usize]) -> Vec<usize> {
    let mut columns = vec![0usize; events.len()];
    // Last event index placed in each column.
    let mut tails: Vec<usize> = Vec::new();

    for &idx in order {
        let event = &events[idx];
        match tails
            .iter()
            .position(|&tail| !events[tail].overlaps_with(event))
        {
            Some(column) => {
                tails[column] = idx;
                columns[idx] = column;
            }
            None => {
                columns[idx] = tails.len();
                tails.push(idx);
            }
        }
    }

    columns
}

/// Split `order` (already chronological) into connected overlap components.
fn component_indices(events: &[Event], order: &[usize]) -> Vec<Vec<usize>> {
    let mut components: Vec<Vec<usize>> = Vec::new();
    // Latest effective end seen in the current component.
    let mut reach = None;

    for &idx in order {
        let event = &events[idx];
        let end = event.effective_end();
        match (components.last_mut(), reach) {
            (Some(current), Some(reached)) if event.start_time < reached => {
                current.push(idx);
                reach = Some(reached.max(end));
            }
            _ => {
                components.push(vec![idx]);
                reach = Some(end);
            }
        }
    }

    components
}

/// Sweep over start/end boundaries. Ends sort before starts at the same
/// instant so touching events are never counted together.
fn peak_concurrency<'a>(events: impl Iterator<Item = &'a Event>) -> usize {
    let mut boundaries: Vec<_> = events
        .flat_map(|e| [(e.start_time, 1i32), (e.effective_end(), -1i32)])
        .collect();
    boundaries.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));

    let mut active: i32 = 0;
    let mut peak: i32 = 0;
    for (_, delta) in boundaries {
        active += delta;
        peak = peak.max(active);
    }

    usize::try_from(peak).unwrap_or(0)
}
