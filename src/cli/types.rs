//! CLI response types.

use campuscal::{ImportSummary, LayoutResult, ParsedEvent, Placement};
use serde::Serialize;

/// Result of the `layout` command.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    pub results: Vec<LayoutResult>,
    pub placements: Vec<Placement>,
}

/// Result of the `import` command.
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub summary: ImportSummary,
    pub events: Vec<ParsedEvent>,
}
