// src/source/mod.rs
// =============================================================================
// This module gets the raw text that the extraction core works on.
//
// Submodules:
// - loader: Reads the list of sources (sources.txt)
// - fetch: Downloads URLs / reads local files, then runs extraction
// - error: The reasons a source can be unavailable
//
// All file and network I/O lives here, never in extract/.
// =============================================================================

mod error;
mod fetch;
mod loader;

pub use fetch::{build_client, process_sources};
pub use loader::load_sources;

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why keep I/O out of the extractor?
//    - extract() only needs a &str, so it is trivial to test
//    - The same function works for web pages and local files
//    - Nothing shared is mutated, so sources can be processed in parallel
//
// 2. Why is the error module private?
//    - Callers never see SourceError directly
//    - Each error becomes a plain message on the SourceResult
// -----------------------------------------------------------------------------
