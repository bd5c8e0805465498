// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// dirspy is a single-purpose tool, so unlike multi-command CLIs we use one
// flat Parser struct instead of a Subcommand enum: a positional base URL
// plus a handful of optional flags.
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "dirspy",
    version = "0.1.0",
    about = "Crawl a web directory tree and report exposed files, sizes and keyword hits",
    long_about = "dirspy starts at a base URL, follows same-origin links inside that URL's \
                  subtree, and reports every reachable file with its size and any matched \
                  sensitive keywords. Aimed at security reconnaissance over exposed web roots."
)]
pub struct Cli {
    /// Base URL to crawl (e.g., http://example.com/)
    ///
    /// Only links whose URL starts with this prefix are followed; everything
    /// outside the subtree is ignored.
    pub base_url: String,

    /// Comma-separated HTTP status codes to drop silently (e.g., '404,403,500')
    ///
    /// A response with one of these codes is neither reported as an anomaly
    /// nor followed any further.
    #[arg(short = 'i', long = "ignore-status", value_name = "CODES")]
    pub ignore_status: Option<String>,

    /// Comma-separated keywords to search for in fetched bodies
    /// (e.g., 'password,secret,api_key')
    ///
    /// Matching is case-insensitive substring containment.
    #[arg(short = 'k', long = "keywords", value_name = "WORDS")]
    pub keywords: Option<String>,

    /// Comma-separated URL suffixes to skip entirely (e.g., '.jpg,.png,.zip')
    ///
    /// Matching links are never fetched at all.
    #[arg(short = 'e', long = "ignore-ext", value_name = "SUFFIXES")]
    pub ignore_ext: Option<String>,

    /// Forward proxy URL (e.g., http://localhost:8080)
    ///
    /// All requests are routed through this proxy when set. Useful for
    /// inspecting traffic with an intercepting proxy.
    #[arg(short = 'p', long = "proxy", value_name = "URL")]
    pub proxy: Option<String>,

    /// Resolve relative links against the page they appear on
    ///
    /// By default dirspy resolves every relative href against the base URL,
    /// matching its historical behavior. That is wrong for listings nested
    /// more than one level deep; this flag switches to resolving against the
    /// current page, the way a browser would.
    #[arg(long)]
    pub resolve_against_page: bool,

    /// Output results in JSON format instead of a table
    #[arg(long)]
    pub json: bool,
}
