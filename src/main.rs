// src/main.rs
// =============================================================================
// This is the entry point of the dirspy CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Build the validated crawl configuration and the HTTP client
//    (the only place a fatal error can occur)
// 3. Run the traversal to completion
// 4. Render the accumulated result set
// 5. Exit with proper code (0 = traversal completed, 2 = startup error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - validated configuration + HTTP client
mod crawl; // src/crawl/ - traversal engine and keyword scanning
mod report; // src/report.rs - result model and rendering

use clap::Parser;
use cli::Cli;
use config::{build_http_client, CrawlConfig};
use crawl::Crawler;

// anyhow::Result lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute creates a tokio runtime and runs our async
// code inside it
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Startup/config errors land here; traversal errors never do,
            // they are absorbed and reported as they happen
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Everything that can fail fatally fails here, before the first fetch
    let config = CrawlConfig::from_cli(&cli)?;
    let client = build_http_client(cli.proxy.as_deref())?;

    let mut crawler = Crawler::new(client, config);
    crawler.run().await;

    report::print_results(crawler.results(), cli.json)?;

    Ok(0)
}
