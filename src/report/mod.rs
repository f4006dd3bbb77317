// src/report/mod.rs
// =============================================================================
// This module turns per-source results into something people can read.
//
// Submodules:
// - summary: SourceResult, the aggregate report and the flattened rows
// - console: The terminal summary
// - export: .xlsx workbook + CSV files (with CSV fallback)
// =============================================================================

mod console;
mod export;
mod summary;

pub use console::{print_summary, render_json};
pub use export::{export_all, export_stem};
pub use summary::{flatten, summarize, SourceResult};
