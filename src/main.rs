// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Load the list of sources (sources file and/or arguments)
// 3. Fetch/read every source and extract its references
// 4. Print the summary (or JSON) and export the results to files
// 5. Exit with proper code (0 = all sources read, 1 = some unavailable, 2 = error)
// =============================================================================

mod cli;      // src/cli.rs - command-line parsing
mod extract;  // src/extract/ - pattern catalog, categorizer, extractor
mod report;   // src/report/ - aggregation, console summary, exports
mod source;   // src/source/ - loading sources, fetching content

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use extract::PatternCatalog;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Diagnostics go to stderr so --json output on stdout stays parseable.
// RUST_LOG wins over --verbose when it is set.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// The main application logic
// Returns:
//   Ok(0) = every source was read
//   Ok(1) = at least one source was unavailable
//   Err = unexpected error (main turns this into exit code 2)
async fn run(cli: Cli) -> Result<i32> {
    let catalog = PatternCatalog::compile().context("Failed to compile the pattern catalog")?;

    let mut sources = match cli.sources_path() {
        Some(path) => source::load_sources(&path).await?,
        None => Vec::new(),
    };
    sources.extend(cli.sources.iter().cloned());

    if sources.is_empty() {
        // --json callers still get a document, with zero totals
        if cli.json {
            println!("{}", report::render_json(&[], &report::summarize(&[]))?);
        } else {
            println!("⚠️  No sources to process");
        }
        return Ok(0);
    }

    if !cli.json {
        println!("🔍 Processing {} source(s)...", sources.len());
    }
    debug!(concurrency = cli.concurrency, timeout = ?cli.timeout(), "starting run");

    let client = source::build_client(cli.timeout())?;
    let results = source::process_sources(sources, &catalog, &client, cli.concurrency).await;

    // Every result is in, so the cross-source totals are complete
    let summary = report::summarize(&results);

    if cli.json {
        println!("{}", report::render_json(&results, &summary)?);
    } else {
        report::print_summary(&results, &summary);
    }

    if !cli.no_export {
        let rows = report::flatten(&results);
        let stem = report::export_stem(chrono::Local::now());
        let paths = report::export_all(&rows, &summary, &cli.output_dir, &stem)?;
        info!(?paths, "export finished");

        if !cli.json {
            if paths.workbook_fell_back {
                println!("\n⚠️  Workbook export failed, wrote CSV instead");
            }
            println!("\n📁 Results exported to: {}", paths.workbook.display());
            println!("📁 Results exported to: {}", paths.csv.display());
        }
    }

    if !cli.json {
        println!("\n✅ Extraction complete!");
    }

    if summary.sources_failed > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why parse the CLI in main() and not in run()?
//    - We need --verbose before anything logs
//    - run() then receives the parsed Cli by value
//
// 2. What is EnvFilter?
//    - It decides which tracing events are shown
//    - RUST_LOG=link_inventory=debug shows our debug events only
//
// 3. Why is the catalog borrowed (&catalog) everywhere?
//    - It is compiled once and never changes
//    - Many concurrent tasks can read it at the same time
// -----------------------------------------------------------------------------
