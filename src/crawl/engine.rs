// src/crawl/engine.rs
// =============================================================================
// The traversal engine - the heart of dirspy.
//
// How it works:
// 1. Start at the base URL and fetch it
// 2. Scan the body for keywords, then parse it as HTML and extract anchors
// 3. Resolve each href to an absolute URL and keep only links inside the
//    base URL's subtree (string-prefix containment)
// 4. Links ending in '/' are subdirectories: recurse into them depth-first
// 5. Everything else is a file: fetch it once and record its size and
//    keyword matches
//
// The walk is sequential and depth-first: a subdirectory is fully explored
// (including all its descendants) before the next sibling link is touched.
// A visited set breaks cycles - directory listings routinely link back to
// themselves and their parents.
//
// Every network or read failure is node-local: it is reported and absorbed,
// and the traversal carries on elsewhere. The only way the walk ends is
// running out of reachable links.
// =============================================================================

use futures::future::BoxFuture;
use reqwest::{Client, StatusCode};
use scraper::{Html, Selector};
use std::collections::{BTreeMap, HashSet};
use url::Url;

use super::scan::find_keywords;
use crate::config::CrawlConfig;
use crate::report::FileEntry;

// One crawl session: the HTTP client, the read-only configuration, and the
// mutable traversal state. State is scoped to this value, never global, so
// independent crawls can coexist and tests stay clean.
pub struct Crawler {
    client: Client,
    config: CrawlConfig,
    /// URLs already dispatched. A URL is inserted exactly once, before its
    /// fetch is attempted, and never removed.
    visited: HashSet<String>,
    /// Files recorded so far, keyed by URL. BTreeMap keeps rendering order
    /// deterministic across runs.
    results: BTreeMap<String, FileEntry>,
}

impl Crawler {
    pub fn new(client: Client, config: CrawlConfig) -> Self {
        Crawler {
            client,
            config,
            visited: HashSet::new(),
            results: BTreeMap::new(),
        }
    }

    /// Runs the traversal to completion, starting at the configured base URL.
    pub async fn run(&mut self) {
        let base = self.config.base_prefix().to_string();
        self.visit(base).await;
    }

    /// Files recorded during the traversal, keyed by URL.
    pub fn results(&self) -> &BTreeMap<String, FileEntry> {
        &self.results
    }

    /// Every URL a fetch was dispatched for.
    pub fn visited(&self) -> &HashSet<String> {
        &self.visited
    }

    // Visits one directory-like URL: fetch, scan, extract links, branch.
    //
    // Async recursion needs an indirection in Rust (the compiler can't size
    // a self-referential future), so this returns a boxed future and the
    // recursive call awaits it.
    fn visit(&mut self, url: String) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            // Extension gate: filtered URLs are never fetched and never
            // enter the visited set
            if self.config.is_ignored_extension(&url) {
                return;
            }

            // Dedup gate: insert() returns false if the URL was already
            // present. Marking before the fetch means a URL discovered
            // twice is still dispatched only once.
            if !self.visited.insert(url.clone()) {
                return;
            }

            println!("Crawling: {}", url);

            let response = match self.client.get(&url).send().await {
                Ok(response) => response,
                Err(e) => {
                    // Transport failure (DNS, connect, TLS): dead end for
                    // this node, not for the traversal
                    eprintln!("Access error {}: {}", url, e);
                    return;
                }
            };

            // Status policy: an ignored non-200 is dropped silently; any
            // other non-200 is reported as an anomaly but still parsed and
            // scanned - error pages can leak link structure and content
            let status = response.status();
            if status != StatusCode::OK {
                if self.config.ignored_status.contains(&status.as_u16()) {
                    return;
                }
                eprintln!("Invalid status code {}: {}", url, status.as_u16());
            } else {
                println!("[200 OK] {}", url);
            }

            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    eprintln!("Error reading body {}: {}", url, e);
                    return;
                }
            };

            // Directories get scanned too: an index listing can leak a
            // secret directly. Matches here are reported, not recorded -
            // the result set holds files only.
            let found = find_keywords(&body, &self.config.keywords);
            if !found.is_empty() {
                println!("Found keywords in {}: {}", url, found.join(", "));
            }

            // Parse and resolve links before any await: scraper's DOM is
            // not Send, so it must not live across a suspension point
            let links = self.extract_links(&body, &url);

            for link in links {
                if link.ends_with('/') {
                    // Subdirectory: recurse, completing it fully before
                    // the next sibling link
                    self.visit(link).await;
                } else {
                    self.fetch_file(&link).await;
                }
            }
        })
    }

    // Parses the body as HTML and returns the in-scope absolute URLs of all
    // anchors, in document order.
    //
    // html5ever is error-tolerant: malformed HTML yields a best-effort DOM
    // rather than a failure, so a broken page degrades to whatever links
    // survive the parse.
    //
    // Relative hrefs resolve against the base URL by default - a documented
    // quirk kept from dirspy's original behavior (wrong for listings nested
    // more than one level deep). --resolve-against-page switches the
    // resolution base to the current page.
    fn extract_links(&self, body: &str, page_url: &str) -> Vec<String> {
        let mut links = Vec::new();

        let document = Html::parse_document(body);

        // "a[href]" is a constant selector, known valid
        let selector = Selector::parse("a[href]").unwrap();

        let page = if self.config.resolve_against_page {
            match Url::parse(page_url) {
                Ok(url) => Some(url),
                Err(_) => None,
            }
        } else {
            None
        };
        let resolution_base = page.as_ref().unwrap_or(&self.config.base_url);

        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                let Some(absolute) = resolve_href(resolution_base, href) else {
                    continue;
                };

                // Containment: only URLs inside the base URL's subtree are
                // followed; anything else is dropped without a fetch
                if absolute.starts_with(self.config.base_prefix()) {
                    links.push(absolute);
                }
            }
        }

        links
    }

    // Fetches a file link and records it in the result set.
    //
    // Files are leaves: they are never parsed for further links. The
    // extension and dedup gates run before the request so a filtered or
    // already-seen file costs nothing.
    async fn fetch_file(&mut self, url: &str) {
        if self.config.is_ignored_extension(url) {
            return;
        }

        if !self.visited.insert(url.to_string()) {
            return;
        }

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                eprintln!("File access error {}: {}", url, e);
                return;
            }
        };

        let status = response.status();

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("Error reading file {}: {}", url, e);
                return;
            }
        };

        if status == StatusCode::OK {
            // Files can be binary; scan a lossy text view for keywords but
            // report the true byte size
            let found = find_keywords(&String::from_utf8_lossy(&bytes), &self.config.keywords);

            let mut line = format!("[200 OK] {} ({} bytes)", url, bytes.len());
            if !found.is_empty() {
                line.push_str(&format!(" [FOUND: {}]", found.join(", ")));
            }
            println!("{}", line);

            self.results.insert(
                url.to_string(),
                FileEntry {
                    url: url.to_string(),
                    size_bytes: bytes.len(),
                    keywords: found,
                },
            );
        } else if !self.config.ignored_status.contains(&status.as_u16()) {
            eprintln!("[{}] {}", status.as_u16(), url);
        }
    }
}

// Resolves an href to an absolute URL string.
//
// Pure fragments and non-web schemes (mailto:, tel:, javascript:) are
// dropped up front; they can never name a fetchable resource under the
// base URL. Anything already absolute is kept as-is; anything relative is
// joined onto the resolution base.
fn resolve_href(base: &Url, href: &str) -> Option<String> {
    if href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
    {
        return None;
    }

    match Url::parse(href) {
        Ok(url) => Some(url.to_string()),
        Err(_) => match base.join(href) {
            Ok(url) => Some(url.to_string()),
            Err(_) => None,
        },
    }
}
