// src/extract/mod.rs
// =============================================================================
// The extraction core: find references in raw text and classify them.
//
// Submodules:
// - types: ReferenceKind, Category, ExtractedReference
// - patterns: The compiled pattern catalog
// - categorize: Reference -> Category
// - extractor: Raw text -> ordered, de-duplicated references
//
// Everything in here is pure. No file or network access happens in this
// module; callers hand us text that has already been loaded.
// =============================================================================

mod categorize;
mod extractor;
mod patterns;
mod types;

pub use extractor::extract;
pub use patterns::PatternCatalog;
pub use types::{Category, ExtractedReference, ReferenceKind};
