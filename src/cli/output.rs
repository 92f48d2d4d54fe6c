//! Output formatting for CLI commands.
//!
//! This module handles formatting output as either JSON or human-readable text.

use anyhow::Result;
use campuscal::ParsedEvent;

use super::types::{ImportReport, LayoutReport};

/// Print layout results.
pub fn print_layout(report: &LayoutReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    if report.results.is_empty() {
        println!("No events.");
        return Ok(());
    }

    for (result, placement) in report.results.iter().zip(&report.placements) {
        println!(
            "{:<24} column {}/{}  top {:.0}px  height {:.0}px  left {:.0}px  width {:.0}px",
            result.event_id,
            result.column + 1,
            result.total_columns,
            placement.top,
            placement.height,
            placement.left,
            placement.width
        );
    }
    Ok(())
}

/// Print a single parsed event (or the lack of one).
pub fn print_parsed(event: Option<&ParsedEvent>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&event)?);
    } else if let Some(event) = event {
        print_event(event);
    } else {
        println!("Not an event.");
    }
    Ok(())
}

/// Print import results.
pub fn print_import(report: &ImportReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    let summary = &report.summary;
    println!(
        "Parsed {} messages ({} new, {} duplicate), skipped {}\n",
        summary.parsed, summary.inserted, summary.duplicates, summary.skipped
    );
    for event in &report.events {
        print_event(event);
        println!();
    }
    Ok(())
}

fn print_event(event: &ParsedEvent) {
    let categories: Vec<&str> = event.categories.iter().map(|c| c.display_name()).collect();
    println!("{}", event.title);
    println!("  ID: {}", event.id);
    println!(
        "  When: {} - {}",
        event.start_time.format("%a %b %-d %Y %H:%M"),
        event.end_time.format("%H:%M")
    );
    if !event.location.is_empty() {
        println!("  Where: {}", event.location);
    }
    println!("  Categories: {}", categories.join(", "));
    println!("  Organizer: {}", event.organizer_name);
}
