// src/source/fetch.rs
// =============================================================================
// Gets the raw text of every source and runs extraction on it.
//
// A source is either:
// - a network locator (http, https or ftp scheme) -> HTTP GET
// - anything else -> a local file path
//
// Sources are processed concurrently, but results come back in the same
// order the sources were given. A source that can't be loaded becomes a
// SourceResult with an error message; it never aborts the run.
//
// Rust concepts:
// - async/await: Network and file reads don't block each other
// - Streams: buffered(n) runs up to n futures at once but yields in order
// =============================================================================

use std::path::Path;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use super::error::{Result, SourceError};
use crate::extract::PatternCatalog;
use crate::report::SourceResult;

const NETWORK_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

// Builds the HTTP client shared by every fetch
//
// One client means one connection pool for the whole run.
pub fn build_client(timeout: Duration) -> anyhow::Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()?;
    Ok(client)
}

// True when the identifier looks like a URL we should download
//
// Examples:
//   "https://example.com"  -> true
//   "ftp://example.com/x"  -> true
//   "pages/index.html"     -> false
//   "C:\\site\\index.html" -> false (scheme "c" is not a network scheme)
//   "https://exa mple.com" -> true (malformed, but still meant for the network)
//
// A locator that fails to parse is still judged by its scheme, so it fails
// as a fetch instead of being read as a file.
pub fn is_network_locator(source: &str) -> bool {
    match Url::parse(source) {
        Ok(url) => NETWORK_SCHEMES.contains(&url.scheme()),
        Err(_) => match source.trim_start().split_once("://") {
            Some((scheme, _)) => NETWORK_SCHEMES.contains(&scheme.to_ascii_lowercase().as_str()),
            None => false,
        },
    }
}

// Downloads a page and returns its body as text
pub async fn fetch_content(client: &Client, url: &str) -> Result<String> {
    if let Ok(parsed) = Url::parse(url) {
        if parsed.scheme() == "ftp" {
            return Err(SourceError::UnsupportedScheme(parsed.scheme().to_string()));
        }
    }

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(SourceError::Status(response.status()));
    }

    Ok(response.text().await?)
}

// Reads a local file
//
// Bytes that aren't valid UTF-8 are replaced instead of failing the read.
pub async fn read_content(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path).await.map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

// Loads one source, whichever kind it is
//
// Empty content counts as a failure: there's nothing to extract from.
pub async fn load_content(client: &Client, source: &str) -> Result<String> {
    let content = if is_network_locator(source) {
        fetch_content(client, source).await?
    } else {
        read_content(Path::new(source)).await?
    };

    if content.is_empty() {
        return Err(SourceError::Empty);
    }

    Ok(content)
}

// Loads and extracts every source
//
// Parameters:
//   sources: source identifiers, in the order results should come back
//   catalog: compiled patterns (shared read-only by every task)
//   client: HTTP client for network sources
//   concurrency: how many sources may be in flight at once
pub async fn process_sources(
    sources: Vec<String>,
    catalog: &PatternCatalog,
    client: &Client,
    concurrency: usize,
) -> Vec<SourceResult> {
    let tasks = sources.into_iter().map(|source| async move {
        debug!(%source, "processing source");

        match load_content(client, &source).await {
            Ok(content) => {
                let result = SourceResult::extracted(source, &content, catalog);
                debug!(source = result.source(), total = result.total(), "source extracted");
                result
            }
            Err(e) => {
                warn!(%source, error = %e, "source unavailable");
                SourceResult::unavailable(source, e.to_string())
            }
        }
    });

    // buffered (not buffer_unordered) so results keep the input order
    stream::iter(tasks)
        .buffered(concurrency.max(1))
        .collect()
        .await
}
