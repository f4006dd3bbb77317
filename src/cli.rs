// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There is no config file: every setting is a flag with a sensible default,
// so `link-inventory` on its own reads ./sources.txt and writes ./results/.
//
// Rust concepts:
// - Derive macros: clap generates the parser from the struct definition
// - Option<T>: Lets us tell "flag not given" apart from "flag = default"
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

const DEFAULT_SOURCES_FILE: &str = "sources.txt";

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "link-inventory",
    version = "0.1.0",
    about = "Inventory the links and assets referenced by web pages and HTML files",
    long_about = "link-inventory reads a list of URLs and/or local HTML files, pulls every href/src \
                  reference out of them, classifies each one (image, document, webpage, ...) and \
                  reports per-source and overall counts. Results are exported as an .xlsx workbook and CSV."
)]
pub struct Cli {
    /// Extra sources (URLs or file paths) to process after the sources file
    ///
    /// Example: link-inventory https://example.com ./site/index.html
    pub sources: Vec<String>,

    /// File listing one URL or file path per line [default: sources.txt]
    ///
    /// When sources are given on the command line this file is optional.
    #[arg(long = "sources", value_name = "FILE")]
    pub sources_file: Option<PathBuf>,

    /// Directory the export files are written to
    #[arg(long, value_name = "DIR", default_value = "./results")]
    pub output_dir: PathBuf,

    /// Network timeout per request, in seconds
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    pub timeout: u64,

    /// Maximum number of sources processed at the same time
    #[arg(long, value_name = "N", default_value_t = 8)]
    pub concurrency: usize,

    /// Print results as JSON instead of the summary table
    #[arg(long)]
    pub json: bool,

    /// Don't write any export files
    #[arg(long)]
    pub no_export: bool,

    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    // The sources file to read, if any
    //
    // An explicit --sources is always read. Otherwise sources.txt is read
    // only when no sources were given as arguments.
    pub fn sources_path(&self) -> Option<PathBuf> {
        match &self.sources_file {
            Some(path) => Some(path.clone()),
            None if self.sources.is_empty() => Some(PathBuf::from(DEFAULT_SOURCES_FILE)),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["link-inventory"]);
        assert_eq!(cli.sources_path(), Some(PathBuf::from("sources.txt")));
        assert_eq!(cli.output_dir, PathBuf::from("./results"));
        assert_eq!(cli.timeout(), Duration::from_secs(10));
        assert_eq!(cli.concurrency, 8);
        assert!(!cli.json && !cli.no_export && !cli.verbose);
    }

    #[test]
    fn test_positional_sources_skip_default_file() {
        let cli = Cli::parse_from(["link-inventory", "https://example.com", "page.html"]);
        assert_eq!(cli.sources, vec!["https://example.com", "page.html"]);
        assert_eq!(cli.sources_path(), None);
    }

    #[test]
    fn test_explicit_sources_file_is_kept() {
        let cli = Cli::parse_from(["link-inventory", "--sources", "list.txt", "extra.html"]);
        assert_eq!(cli.sources_path(), Some(PathBuf::from("list.txt")));
        assert_eq!(cli.sources, vec!["extra.html"]);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "link-inventory",
            "--json",
            "--no-export",
            "-v",
            "--timeout",
            "3",
            "--concurrency",
            "2",
            "--output-dir",
            "out",
        ]);
        assert!(cli.json && cli.no_export && cli.verbose);
        assert_eq!(cli.timeout(), Duration::from_secs(3));
        assert_eq!(cli.concurrency, 2);
        assert_eq!(cli.output_dir, PathBuf::from("out"));
    }
}
