// src/extract/extractor.rs
// =============================================================================
// Pulls references out of raw HTML text.
//
// This is NOT an HTML parser. We never build a DOM, resolve relative paths
// or run scripts. We scan the text with the reference rules from the pattern
// catalog, one pass per rule:
//
// 1. Complete URLs        href="https://example.com/a.pdf"
// 2. Protocol-relative    src="//cdn.example.com/pic.jpg"
// 3. Absolute paths       href="/about"
//
// Values in any other form (href="mailto:...", href="#top", "page.html")
// are not references and are skipped.
//
// The absolute-path rule also matches values starting with "//", so pass 3
// throws away anything that starts with a scheme or "//". Finally we drop
// duplicates, keeping the first occurrence: earlier passes win over later
// ones, and inside one pass the leftmost match wins.
//
// Known limitation: in malformed markup the absolute-path rule can pick up
// a fragment of a longer URL that pass 1 already captured. Deduplication by
// exact string only hides this when the strings are identical.
// =============================================================================

use std::collections::HashSet;

use tracing::debug;

use super::categorize::categorize;
use super::patterns::PatternCatalog;
use super::types::{ExtractedReference, ReferenceKind};

// Prefixes that can never be an absolute path
const NON_PATH_PREFIXES: [&str; 4] = ["http://", "https://", "ftp://", "//"];

// Extracts every unique reference from `content`, in first-seen order
//
// Parameters:
//   catalog: the compiled patterns (shared, read-only)
//   content: raw HTML text
//
// Returns an empty Vec when nothing matches, including for empty content.
//
// Example:
//   content = r#"<a href="/about">About</a><a href="/about">Again</a>"#
//   result  = [("/about", Absolute Path, Webpage)]
pub fn extract(catalog: &PatternCatalog, content: &str) -> Vec<ExtractedReference> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut references = Vec::new();

    for rule in catalog.reference_rules() {
        let kind = rule.kind();
        let before = references.len();

        for url in rule.find_iter(content) {
            if kind == ReferenceKind::AbsolutePath && has_non_path_prefix(url) {
                continue;
            }

            // insert() returns false when we've already recorded this string
            if seen.insert(url) {
                references.push(ExtractedReference::new(url, kind, categorize(catalog, url)));
            }
        }

        debug!(kind = %kind, new = references.len() - before, "reference pass finished");
    }

    references
}

fn has_non_path_prefix(url: &str) -> bool {
    NON_PATH_PREFIXES.iter().any(|prefix| url.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::types::Category;

    fn run(content: &str) -> Vec<ExtractedReference> {
        let catalog = PatternCatalog::compile().unwrap();
        extract(&catalog, content)
    }

    fn triples(refs: &[ExtractedReference]) -> Vec<(&str, ReferenceKind, Category)> {
        refs.iter().map(|r| (r.url(), r.kind(), r.category())).collect()
    }

    #[test]
    fn test_mixed_page() {
        let html = r#"<a href="https://example.com/a.pdf">x</a><img src="//cdn.example.com/pic.jpg"><link href="/about">"#;
        let refs = run(html);
        assert_eq!(
            triples(&refs),
            vec![
                ("https://example.com/a.pdf", ReferenceKind::CompleteUrl, Category::Document),
                ("//cdn.example.com/pic.jpg", ReferenceKind::ProtocolRelative, Category::Image),
                ("/about", ReferenceKind::AbsolutePath, Category::Webpage),
            ]
        );
    }

    #[test]
    fn test_pass_order_beats_document_order() {
        // The path comes first in the text but the complete URL pass runs first
        let html = r#"<a href="/first">1</a><a href="https://example.com/second">2</a>"#;
        let refs = run(html);
        assert_eq!(refs[0].url(), "https://example.com/second");
        assert_eq!(refs[1].url(), "/first");
    }

    #[test]
    fn test_mailto_and_tel_values_are_skipped() {
        let html = r#"<a href="mailto:a@x.com">m</a><a href='tel:+1555'>t</a><a href="/contact">c</a>"#;
        assert_eq!(
            triples(&run(html)),
            vec![("/contact", ReferenceKind::AbsolutePath, Category::Webpage)]
        );
        assert!(run(r#"<a href="mailto:test@x.com">mail</a>"#).is_empty());
    }

    #[test]
    fn test_email_and_phone_categories_via_paths() {
        let html = r#"<a href="/contact?to=mailto:x@example.com">m</a><a href="https://example.com/call?tel:+1555">t</a>"#;
        assert_eq!(
            triples(&run(html)),
            vec![
                ("https://example.com/call?tel:+1555", ReferenceKind::CompleteUrl, Category::PhoneLink),
                ("/contact?to=mailto:x@example.com", ReferenceKind::AbsolutePath, Category::EmailLink),
            ]
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        let refs = run(r#"<a href="/a">1</a><p><a href="/a">2</a></p>"#);
        assert_eq!(triples(&refs), vec![("/a", ReferenceKind::AbsolutePath, Category::Webpage)]);
    }

    #[test]
    fn test_duplicate_across_quote_styles() {
        let refs = run(r#"<img src='/logo.svg'><img src="/logo.svg">"#);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].category(), Category::Image);
    }

    #[test]
    fn test_protocol_relative_is_not_an_absolute_path() {
        let refs = run(r#"<script src="//cdn.example.com/app.js"></script>"#);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].kind(), ReferenceKind::ProtocolRelative);
        assert_eq!(refs[0].category(), Category::ScriptOrStyle);
    }

    #[test]
    fn test_fragment_on_image_path() {
        let refs = run(r#"<a href="/img/photo.jpg#frag">photo</a>"#);
        assert_eq!(
            triples(&refs),
            vec![("/img/photo.jpg#frag", ReferenceKind::AbsolutePath, Category::Image)]
        );
    }

    #[test]
    fn test_absolute_paths_never_carry_a_scheme() {
        let html = r#"
            <a href="http://a.example.com/">a</a>
            <a href="HTTPS://b.example.com/">b</a>
            <a href="//c.example.com/">c</a>
            <a href="/d">d</a>
            <img src="ftp://e.example.com/e.png">
        "#;
        for r in run(html) {
            if r.kind() == ReferenceKind::AbsolutePath {
                assert!(!has_non_path_prefix(r.url()), "{} leaked", r.url());
            }
        }
    }

    #[test]
    fn test_empty_and_unmatched_content() {
        assert!(run("").is_empty());
        assert!(run("<p>no links here</p>").is_empty());
        assert!(run(r#"<a href=>broken</a><a href="relative/page">rel</a>"#).is_empty());
        assert!(run(r##"<a href="#top">top</a>"##).is_empty());
    }

    #[test]
    fn test_extract_is_idempotent_and_unique() {
        let html = r#"
            <link rel="stylesheet" href="/css/site.css?v=2">
            <a href="https://example.com/">home</a>
            <a href="https://example.com/">home again</a>
            <img SRC="//img.example.com/x.gif">
            <a href="/docs/guide.pdf#page=3">guide</a>
            <a href="/css/site.css?v=2">dup</a>
        "#;
        let first = run(html);
        let second = run(html);
        assert_eq!(first, second);

        let unique: HashSet<&str> = first.iter().map(|r| r.url()).collect();
        assert_eq!(unique.len(), first.len());
        assert_eq!(first.len(), 4);
    }
}
