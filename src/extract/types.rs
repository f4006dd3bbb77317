// src/extract/types.rs
// =============================================================================
// The data model for extracted references.
//
// - ReferenceKind: HOW a reference was written in the markup
// - Category: WHAT kind of resource the reference points at
// - ExtractedReference: one (reference, kind, category) triple
//
// The display labels here are the exact strings that show up in the console
// summary, the CSV export and the JSON output, so downstream reports can rely
// on them.
// =============================================================================

use serde::Serialize;
use std::fmt;

// The syntactic form of a reference
//
// A reference gets exactly one kind: the first pass of the extractor that
// recognises it wins (see extractor.rs for the pass order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReferenceKind {
    /// Has an explicit http, https or ftp scheme
    #[serde(rename = "Complete URL")]
    CompleteUrl,
    /// Starts with `//` and inherits the page's scheme
    #[serde(rename = "Protocol-Relative")]
    ProtocolRelative,
    /// Starts with a single `/`
    #[serde(rename = "Absolute Path")]
    AbsolutePath,
}

impl ReferenceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ReferenceKind::CompleteUrl => "Complete URL",
            ReferenceKind::ProtocolRelative => "Protocol-Relative",
            ReferenceKind::AbsolutePath => "Absolute Path",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// The semantic type of a reference
//
// Variants are declared in precedence order, and the derived Ord follows
// declaration order. Summary columns use that order too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    Image,
    Video,
    Audio,
    Document,
    #[serde(rename = "Script/Style")]
    ScriptOrStyle,
    Archive,
    #[serde(rename = "Anchor Link")]
    AnchorLink,
    #[serde(rename = "Email Link")]
    EmailLink,
    #[serde(rename = "Phone Link")]
    PhoneLink,
    /// Fallback when nothing else matches
    Webpage,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Image => "Image",
            Category::Video => "Video",
            Category::Audio => "Audio",
            Category::Document => "Document",
            Category::ScriptOrStyle => "Script/Style",
            Category::Archive => "Archive",
            Category::AnchorLink => "Anchor Link",
            Category::EmailLink => "Email Link",
            Category::PhoneLink => "Phone Link",
            Category::Webpage => "Webpage",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// One reference found in a document
//
// Fields are private so a reference can't be changed after extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedReference {
    url: String,
    kind: ReferenceKind,
    category: Category,
}

impl ExtractedReference {
    pub fn new(url: impl Into<String>, kind: ReferenceKind, category: Category) -> Self {
        Self {
            url: url.into(),
            kind,
            category,
        }
    }

    /// The raw attribute value, exactly as it appeared in the markup
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn kind(&self) -> ReferenceKind {
        self.kind
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_serialized_names() {
        let all = [
            Category::Image,
            Category::Video,
            Category::Audio,
            Category::Document,
            Category::ScriptOrStyle,
            Category::Archive,
            Category::AnchorLink,
            Category::EmailLink,
            Category::PhoneLink,
            Category::Webpage,
        ];
        for category in all {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }

        let json = serde_json::to_string(&ReferenceKind::ProtocolRelative).unwrap();
        assert_eq!(json, "\"Protocol-Relative\"");
    }

    #[test]
    fn test_category_order_follows_precedence() {
        let mut shuffled = vec![Category::Webpage, Category::Archive, Category::Image];
        shuffled.sort();
        assert_eq!(shuffled, vec![Category::Image, Category::Archive, Category::Webpage]);
    }
}
