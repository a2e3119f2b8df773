// src/timeline/mod.rs
// =============================================================================
// Turns a flat list of repositories into what the timeline shows.
//
// Submodules:
// - group: by-year and by-month groupings, plus left/right placement
// - stats: totals, per-year counts and top languages
//
// No network, no errors: these are plain functions over slices.
// =============================================================================

mod group;
mod stats;

pub use group::{group_by_month, MonthGroup, Side};
pub use stats::{summarize, Summary};
