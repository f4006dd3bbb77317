// src/source/loader.rs
// =============================================================================
// Reads the list of sources to process.
//
// Format: one URL or file path per line. Surrounding whitespace is trimmed
// and blank lines are skipped. Nothing else is interpreted.
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};

// Loads sources from a text file
pub async fn load_sources(path: &Path) -> Result<Vec<String>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read sources file {}", path.display()))?;

    Ok(parse_sources(&text))
}

// Splits the file contents into source identifiers
pub fn parse_sources(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_skips_blanks() {
        let text = "  https://example.com  \n\n\tpages/index.html\r\n   \n/tmp/a.html";
        assert_eq!(
            parse_sources(text),
            vec!["https://example.com", "pages/index.html", "/tmp/a.html"]
        );
    }

    #[test]
    fn test_parse_empty_file() {
        assert!(parse_sources("").is_empty());
        assert!(parse_sources("\n \n").is_empty());
    }

    #[tokio::test]
    async fn test_load_sources_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sources.txt");
        std::fs::write(&path, "https://example.com\nlocal.html\n").unwrap();

        let sources = load_sources(&path).await.unwrap();
        assert_eq!(sources, vec!["https://example.com", "local.html"]);
    }

    #[tokio::test]
    async fn test_missing_sources_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_sources(&dir.path().join("nope.txt")).await.unwrap_err();
        assert!(err.to_string().contains("Failed to read sources file"));
    }
}
