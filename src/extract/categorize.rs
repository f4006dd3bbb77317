// src/extract/categorize.rs
// =============================================================================
// Decides which Category a single reference belongs to.
//
// Order matters, and only the first matching rule counts:
// 1. File extensions: Image, Video, Audio, Document, Script/Style, Archive
// 2. Special markers: '#' (Anchor Link), then "mailto:" (Email Link),
//    then "tel:" (Phone Link)
// 3. Anything else is a Webpage
//
// Because extensions are checked first, "/manual.pdf#page=2" is a Document,
// not an Anchor Link. Reports depend on this ordering.
// =============================================================================

use super::patterns::PatternCatalog;
use super::types::Category;

// Categorizes one reference string
//
// Never fails: every input (including "") ends up in some category.
pub fn categorize(catalog: &PatternCatalog, reference: &str) -> Category {
    if let Some(rule) = catalog
        .resource_rules()
        .iter()
        .find(|rule| rule.matches(reference))
    {
        return rule.category();
    }

    if reference.contains('#') {
        Category::AnchorLink
    } else if contains_ignore_ascii_case(reference, "mailto:") {
        Category::EmailLink
    } else if contains_ignore_ascii_case(reference, "tel:") {
        Category::PhoneLink
    } else {
        Category::Webpage
    }
}

// Case-insensitive substring search for an ASCII needle
fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}
