// src/extract/patterns.rs
// =============================================================================
// The pattern catalog: every regular expression the extractor and the
// categorizer use, compiled once and then shared read-only.
//
// Two families of patterns:
// - Reference rules find href/src attribute values in raw markup
//   (href="https://...", src='//cdn...', href="/about")
// - Resource rules look at the end of a reference to decide what kind of
//   file it points at (.jpg, .pdf, .zip, ...)
//
// The catalog is plain immutable data. Build it once in main() and pass a
// reference around; nothing in here is global or mutable, so several sources
// can be processed at the same time against the same catalog.
//
// Rust concepts:
// - regex::Regex: A compiled regular expression (compile once, use many times)
// - Raw strings r#"..."#: Let us write quotes and backslashes without escaping
// =============================================================================

use regex::{Captures, Regex};

use super::types::{Category, ReferenceKind};

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "svg", "webp", "ico"];
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "wmv", "flv", "webm", "mkv"];
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "flac", "aac", "m4a"];
pub const DOCUMENT_EXTENSIONS: &[&str] =
    &["pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "txt", "csv"];
pub const SCRIPT_STYLE_EXTENSIONS: &[&str] = &["js", "css"];
pub const ARCHIVE_EXTENSIONS: &[&str] = &["zip", "rar", "tar", "gz", "7z"];

// Recognises one syntactic form of reference inside an href/src attribute
#[derive(Debug, Clone)]
pub struct ReferenceRule {
    kind: ReferenceKind,
    regex: Regex,
}

impl ReferenceRule {
    fn compile(kind: ReferenceKind, value_prefix: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            kind,
            regex: Regex::new(&attribute_pattern(value_prefix))?,
        })
    }

    pub fn kind(&self) -> ReferenceKind {
        self.kind
    }

    /// Attribute values matched by this rule, left to right
    pub fn find_iter<'c>(&'c self, content: &'c str) -> impl Iterator<Item = &'c str> + 'c {
        self.regex.captures_iter(content).filter_map(attribute_value)
    }
}

// Maps a file-extension suffix to a category
#[derive(Debug, Clone)]
pub struct ResourceRule {
    category: Category,
    regex: Regex,
}

impl ResourceRule {
    fn compile(category: Category, extensions: &[&str]) -> Result<Self, regex::Error> {
        Ok(Self {
            category,
            regex: Regex::new(&suffix_pattern(extensions))?,
        })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn matches(&self, reference: &str) -> bool {
        self.regex.is_match(reference)
    }
}

// All compiled rules, in the order they must be applied
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    reference_rules: Vec<ReferenceRule>,
    resource_rules: Vec<ResourceRule>,
}

impl PatternCatalog {
    // Compiles every pattern
    //
    // The patterns are constants, so an error here is a programming mistake,
    // but we still hand it back to the caller instead of panicking.
    pub fn compile() -> Result<Self, regex::Error> {
        let reference_rules = vec![
            ReferenceRule::compile(ReferenceKind::CompleteUrl, "(?:https?|ftp)://")?,
            ReferenceRule::compile(ReferenceKind::ProtocolRelative, "//")?,
            ReferenceRule::compile(ReferenceKind::AbsolutePath, "/")?,
        ];

        let resource_rules = vec![
            ResourceRule::compile(Category::Image, IMAGE_EXTENSIONS)?,
            ResourceRule::compile(Category::Video, VIDEO_EXTENSIONS)?,
            ResourceRule::compile(Category::Audio, AUDIO_EXTENSIONS)?,
            ResourceRule::compile(Category::Document, DOCUMENT_EXTENSIONS)?,
            ResourceRule::compile(Category::ScriptOrStyle, SCRIPT_STYLE_EXTENSIONS)?,
            ResourceRule::compile(Category::Archive, ARCHIVE_EXTENSIONS)?,
        ];

        Ok(Self {
            reference_rules,
            resource_rules,
        })
    }

    /// Reference rules in extraction pass order
    pub fn reference_rules(&self) -> &[ReferenceRule] {
        &self.reference_rules
    }

    /// Resource rules in categorization precedence order
    pub fn resource_rules(&self) -> &[ResourceRule] {
        &self.resource_rules
    }
}

// Builds the shared href/src attribute shell around a value prefix
//
// href or src (any case), '=', optional whitespace, an opening quote,
// optional whitespace, then a value that starts with the prefix and runs
// until whitespace, a quote or '>'. The closing quote has to be the same
// character as the opening one. The regex crate has no backreferences, so
// each quote style gets its own alternative and capture group.
fn attribute_pattern(value_prefix: &str) -> String {
    let value = format!(r#"{value_prefix}[^'"\s>]+"#);
    format!(r#"(?i)(?:href|src)\s*=\s*(?:"\s*({value})"|'\s*({value})')"#)
}

// `.ext` at the very end, optionally followed by a query string or fragment
fn suffix_pattern(extensions: &[&str]) -> String {
    format!(r"(?i)\.(?:{})(?:[?#].*)?$", extensions.join("|"))
}

// Whichever quote-style group participated in the match
fn attribute_value<'c>(caps: Captures<'c>) -> Option<&'c str> {
    caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str())
}
