// src/report/export.rs
// =============================================================================
// Writes results to disk.
//
// Two files per run:
// - url_extraction_results_<timestamp>.xlsx: a workbook with two sheets,
//   "All URLs" (one row per reference) and "Summary" (one row per source,
//   one column per category seen anywhere, zero when a source has none)
// - url_extraction_results_<timestamp>.csv: just the "All URLs" table
//
// If the workbook can't be written (cell limits, disk errors, ...) we fall
// back to writing the same rows as CSV under the workbook's name with a .csv
// extension, so no data is lost.
//
// Both exports read from the same flattened rows (see summary::flatten).
// =============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::{info, warn};

use super::summary::{AggregateReport, ReferenceRow};

const ROW_COLUMNS: [&str; 4] = ["Source", "URL", "URL Type", "Category"];

// Where the files of one export ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    /// The workbook, or the CSV written in its place
    pub workbook: PathBuf,
    pub csv: PathBuf,
    /// True when the workbook failed and was replaced by CSV
    pub workbook_fell_back: bool,
}

// File name stem for one run, e.g. url_extraction_results_20240131_235959
pub fn export_stem(now: DateTime<Local>) -> String {
    format!("url_extraction_results_{}", now.format("%Y%m%d_%H%M%S"))
}

// Writes both exports into `dir` (created if missing)
pub fn export_all(
    rows: &[ReferenceRow<'_>],
    report: &AggregateReport,
    dir: &Path,
    stem: &str,
) -> Result<ExportPaths> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let (workbook, workbook_fell_back) =
        write_workbook_or_csv(rows, report, &dir.join(format!("{stem}.xlsx")))?;

    let csv = dir.join(format!("{stem}.csv"));
    write_csv(rows, &csv)?;
    info!(path = %csv.display(), rows = rows.len(), "CSV exported");

    Ok(ExportPaths {
        workbook,
        csv,
        workbook_fell_back,
    })
}

// Tries the workbook; on failure writes CSV next to it instead
//
// Returns the path actually written and whether the fallback was used.
pub fn write_workbook_or_csv(
    rows: &[ReferenceRow<'_>],
    report: &AggregateReport,
    path: &Path,
) -> Result<(PathBuf, bool)> {
    match write_workbook(rows, report, path) {
        Ok(()) => {
            info!(path = %path.display(), "workbook exported");
            Ok((path.to_path_buf(), false))
        }
        Err(e) => {
            let fallback = path.with_extension("csv");
            warn!(error = %format!("{e:#}"), fallback = %fallback.display(), "workbook export failed, falling back to CSV");
            write_csv(rows, &fallback)?;
            Ok((fallback, true))
        }
    }
}

// Writes the two-sheet .xlsx workbook
pub fn write_workbook(rows: &[ReferenceRow<'_>], report: &AggregateReport, path: &Path) -> Result<()> {
    let bold = Format::new().set_bold();
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("All URLs")?;
    write_header(sheet, &ROW_COLUMNS, &bold)?;
    for (i, row) in rows.iter().enumerate() {
        let r = sheet_row(i)?;
        sheet.write_string(r, 0, row.source)?;
        sheet.write_string(r, 1, row.url)?;
        sheet.write_string(r, 2, row.url_type.label())?;
        sheet.write_string(r, 3, row.category.label())?;
    }

    let sheet = workbook.add_worksheet();
    sheet.set_name("Summary")?;
    write_header(sheet, &summary_header(report), &bold)?;
    for (i, row) in report.rows.iter().enumerate() {
        let r = sheet_row(i)?;
        sheet.write_string(r, 0, &row.source)?;
        sheet.write_number(r, 1, row.total as f64)?;
        // counts is zero-filled over report.categories, in the same order
        for (col, count) in (2u16..).zip(row.counts.values()) {
            sheet.write_number(r, col, *count as f64)?;
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

// Column titles of the Summary sheet
pub fn summary_header(report: &AggregateReport) -> Vec<&'static str> {
    let mut columns = vec!["Source", "Total URLs"];
    columns.extend(report.categories.iter().map(|c| c.label()));
    columns
}

fn write_header(sheet: &mut Worksheet, columns: &[&str], format: &Format) -> Result<()> {
    for (col, title) in (0u16..).zip(columns) {
        sheet.write_string_with_format(0, col, *title, format)?;
    }
    Ok(())
}

// Data rows start below the header
fn sheet_row(index: usize) -> Result<u32> {
    u32::try_from(index + 1).context("Too many rows for a worksheet")
}

// Writes the "All URLs" table as CSV
pub fn write_csv(rows: &[ReferenceRow<'_>], path: &Path) -> Result<()> {
    fs::write(path, render_csv(rows)?).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

// Header line, then one record per row (quoting handled by the csv crate)
pub fn render_csv(rows: &[ReferenceRow<'_>]) -> Result<String> {
    // The header is written by hand so an empty export still has one
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(ROW_COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
