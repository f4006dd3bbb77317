// src/report/console.rs
// =============================================================================
// Prints the results to the terminal, either as a human-readable summary or
// as JSON (--json).
//
// Summary layout:
//   ==========
//   EXTRACTION SUMMARY
//   ==========
//   Total Sources Processed (URLs/files): 3
//   Total URLs Found: 42
//
//   Per-Source Breakdown:
//   ----------
//   https://example.com: 40 URLs
//     - Image: 12
//     - Webpage: 28
//
// Categories are listed alphabetically by name.
// =============================================================================

use std::fmt;

use serde_json::json;

use super::summary::{AggregateReport, SourceResult};

const WIDTH: usize = 70;

// The summary text, rendered through Display
pub struct Summary<'a> {
    pub results: &'a [SourceResult],
    pub report: &'a AggregateReport,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n{}", "=".repeat(WIDTH))?;
        writeln!(f, "EXTRACTION SUMMARY")?;
        writeln!(f, "{}", "=".repeat(WIDTH))?;

        writeln!(f, "\nTotal Sources Processed (URLs/files): {}", self.report.sources_processed)?;
        writeln!(f, "Total URLs Found: {}", self.report.grand_total)?;
        if self.report.sources_failed > 0 {
            writeln!(f, "Sources Unavailable: {}", self.report.sources_failed)?;
        }

        writeln!(f, "\nPer-Source Breakdown:")?;
        writeln!(f, "{}", "-".repeat(WIDTH))?;

        for result in self.results {
            writeln!(f, "\n{}: {} URLs", result.source(), result.total())?;

            if let Some(error) = result.error() {
                writeln!(f, "  ! {}", error)?;
            }

            let mut counts: Vec<_> = result.category_counts().iter().collect();
            counts.sort_by_key(|(category, _)| category.label());
            for (category, count) in counts {
                writeln!(f, "  - {}: {}", category, count)?;
            }
        }

        Ok(())
    }
}

pub fn print_summary(results: &[SourceResult], report: &AggregateReport) {
    print!("{}", Summary { results, report });
}

// The --json document: the aggregate report plus every per-source result
pub fn render_json(results: &[SourceResult], report: &AggregateReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&json!({ "summary": report, "results": results }))
}
