// src/config.rs
// =============================================================================
// This module turns raw CLI arguments into a validated, read-only
// configuration for the whole traversal, plus the HTTP client that performs
// the actual requests.
//
// Configuration errors (bad base URL, bad proxy URL, non-numeric status
// code) are the only fatal errors in dirspy: they abort at startup with
// context via anyhow. Once a CrawlConfig exists, the traversal engine never
// sees an invalid configuration.
// =============================================================================

use anyhow::{anyhow, Context, Result};
use reqwest::{Client, Proxy};
use std::collections::HashSet;
use url::Url;

use crate::cli::Cli;

// Immutable configuration for one crawl run.
//
// Built once from the CLI and shared (by reference) with the engine;
// nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Parsed base URL. Its string form is the containment prefix: only
    /// links starting with it are followed.
    pub base_url: Url,
    /// Non-200 responses with one of these codes are dropped silently.
    pub ignored_status: HashSet<u16>,
    /// Keywords to scan fetched bodies for, in the order the user gave them.
    pub keywords: Vec<String>,
    /// URL suffixes that are skipped without ever being fetched.
    pub ignored_extensions: Vec<String>,
    /// Resolve relative links against the current page instead of the base
    /// URL (corrected behavior, off by default).
    pub resolve_against_page: bool,
}

impl CrawlConfig {
    // Builds and validates the configuration from parsed CLI arguments
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let base_url = Url::parse(&cli.base_url)
            .map_err(|e| anyhow!("Invalid base URL '{}': {}", cli.base_url, e))?;

        Ok(CrawlConfig {
            base_url,
            ignored_status: parse_status_codes(cli.ignore_status.as_deref())?,
            keywords: parse_list(cli.keywords.as_deref()),
            ignored_extensions: parse_list(cli.ignore_ext.as_deref()),
            resolve_against_page: cli.resolve_against_page,
        })
    }

    /// The containment prefix as a string (e.g., "http://example.com/dir/")
    pub fn base_prefix(&self) -> &str {
        self.base_url.as_str()
    }

    /// True if this URL ends with one of the ignored suffixes.
    ///
    /// Such URLs are never fetched and never enter the visited set.
    pub fn is_ignored_extension(&self, url: &str) -> bool {
        self.ignored_extensions
            .iter()
            .any(|ext| url.ends_with(ext.as_str()))
    }
}

// Parses a comma-separated list of status codes into a set.
//
// Whitespace around entries is tolerated ("404, 403" works), but a
// non-numeric entry is a configuration error and aborts startup.
fn parse_status_codes(codes: Option<&str>) -> Result<HashSet<u16>> {
    let mut ignored = HashSet::new();
    let Some(codes) = codes else {
        return Ok(ignored);
    };

    for code in codes.split(',') {
        let code = code.trim();
        if code.is_empty() {
            continue;
        }
        let status: u16 = code
            .parse()
            .with_context(|| format!("Invalid status code '{}' in --ignore-status", code))?;
        ignored.insert(status);
    }
    Ok(ignored)
}

// Parses a comma-separated list of strings (keywords or extension suffixes),
// trimming whitespace and dropping blank entries. Order is preserved:
// keyword output reporting depends on it.
fn parse_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

// Builds the HTTP client used for every request in the run.
//
// Certificate verification is deliberately disabled: dirspy is a recon tool
// and routinely talks to self-signed hosts or through an intercepting proxy.
// An invalid proxy URL is fatal at startup.
pub fn build_http_client(proxy: Option<&str>) -> Result<Client> {
    let mut builder = Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .danger_accept_invalid_certs(true);

    if let Some(proxy_url) = proxy {
        let proxy = Proxy::all(proxy_url)
            .map_err(|e| anyhow!("Invalid proxy URL '{}': {}", proxy_url, e))?;
        builder = builder.proxy(proxy);
    }

    builder.build().context("Failed to build HTTP client")
}
