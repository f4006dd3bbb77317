// src/report/summary.rs
// =============================================================================
// Per-source results and the cross-source aggregate.
//
// - SourceResult: everything we learned about one source (or why we couldn't
//   learn anything)
// - ReferenceRow: one flattened (Source, URL, URL Type, Category) row, the
//   shape both file exports consume
// - AggregateReport: grand totals plus one zero-filled summary row per
//   source, so every row has the same category columns
//
// Rust concepts:
// - BTreeMap: A sorted map, keys come out in order (here: Category order)
// - Lifetimes ('a): ReferenceRow borrows from the results instead of copying
// =============================================================================

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::extract::{extract, Category, ExtractedReference, PatternCatalog, ReferenceKind};

// The outcome for one source
//
// Built once and never modified afterwards, so the fields are private.
#[derive(Debug, Clone, Serialize)]
pub struct SourceResult {
    source: String,
    total: usize,
    category_counts: BTreeMap<Category, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    references: Vec<ExtractedReference>,
}

impl SourceResult {
    /// Runs extraction over already-loaded content
    pub fn extracted(source: impl Into<String>, content: &str, catalog: &PatternCatalog) -> Self {
        let references = extract(catalog, content);

        let mut category_counts = BTreeMap::new();
        for reference in &references {
            *category_counts.entry(reference.category()).or_insert(0) += 1;
        }

        Self {
            source: source.into(),
            total: references.len(),
            category_counts,
            error: None,
            references,
        }
    }

    /// A source whose content could not be obtained
    pub fn unavailable(source: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            total: 0,
            category_counts: BTreeMap::new(),
            error: Some(reason.into()),
            references: Vec::new(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn references(&self) -> &[ExtractedReference] {
        &self.references
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn category_counts(&self) -> &BTreeMap<Category, usize> {
        &self.category_counts
    }

    /// The failure reason, if the content was unavailable
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

// One line of the "all URLs" table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceRow<'a> {
    #[serde(rename = "Source")]
    pub source: &'a str,
    #[serde(rename = "URL")]
    pub url: &'a str,
    #[serde(rename = "URL Type")]
    pub url_type: ReferenceKind,
    #[serde(rename = "Category")]
    pub category: Category,
}

// Flattens all results into rows, source by source, references in order
pub fn flatten(results: &[SourceResult]) -> Vec<ReferenceRow<'_>> {
    results
        .iter()
        .flat_map(|result| {
            result.references().iter().map(move |reference| ReferenceRow {
                source: result.source(),
                url: reference.url(),
                url_type: reference.kind(),
                category: reference.category(),
            })
        })
        .collect()
}

// One line of the summary table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub source: String,
    pub total: usize,
    /// Every vocabulary category, zero when this source had none
    pub counts: BTreeMap<Category, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// Totals across every source
//
// Computed on demand from a finished list of results; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateReport {
    pub grand_total: usize,
    pub sources_processed: usize,
    pub sources_failed: usize,
    /// Union of the categories seen in any source, in Category order
    pub categories: Vec<Category>,
    pub rows: Vec<SummaryRow>,
}

// Folds per-source results into an AggregateReport
//
// Failed sources still get a row (with total 0), they just add nothing to
// the grand total.
pub fn summarize(results: &[SourceResult]) -> AggregateReport {
    let vocabulary: BTreeSet<Category> = results
        .iter()
        .flat_map(|result| result.category_counts().keys().copied())
        .collect();

    let rows = results
        .iter()
        .map(|result| SummaryRow {
            source: result.source().to_string(),
            total: result.total(),
            counts: vocabulary
                .iter()
                .map(|category| {
                    let count = result.category_counts().get(category).copied().unwrap_or(0);
                    (*category, count)
                })
                .collect(),
            error: result.error().map(str::to_string),
        })
        .collect();

    AggregateReport {
        grand_total: results.iter().map(SourceResult::total).sum(),
        sources_processed: results.len(),
        sources_failed: results.iter().filter(|r| !r.is_ok()).count(),
        categories: vocabulary.into_iter().collect(),
        rows,
    }
}
