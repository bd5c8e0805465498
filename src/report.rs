// src/report.rs
// =============================================================================
// Result model and final rendering.
//
// The engine accumulates one FileEntry per recorded file; once the
// traversal terminates this module renders the whole set either as a
// human-readable listing or as JSON (for piping into other tools).
// =============================================================================

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;

// One successfully fetched file resource
//
// #[derive(Serialize)] lets us emit it as JSON for --json output
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileEntry {
    /// Absolute URL of the file
    pub url: String,
    /// Length of the fetched body in bytes
    pub size_bytes: usize,
    /// Keywords found in the body, in configured order (may be empty)
    pub keywords: Vec<String>,
}

// Prints the final result set either as a listing or as JSON
pub fn print_results(results: &BTreeMap<String, FileEntry>, json: bool) -> Result<()> {
    if json {
        // Serialize the entries (already sorted by URL) and print
        let entries: Vec<&FileEntry> = results.values().collect();
        let json_output = serde_json::to_string_pretty(&entries)?;
        println!("{}", json_output);
    } else {
        print_listing(results);
    }
    Ok(())
}

// Prints results as a human-readable listing with a summary
fn print_listing(results: &BTreeMap<String, FileEntry>) {
    println!("\nResults:");

    for entry in results.values() {
        let mut line = format!("-> {}: {} bytes", entry.url, entry.size_bytes);
        if !entry.keywords.is_empty() {
            line.push_str(&format!(
                " [FOUND KEYWORDS: {}]",
                entry.keywords.join(", ")
            ));
        }
        println!("{}", line);
    }

    let with_keywords = results
        .values()
        .filter(|entry| !entry.keywords.is_empty())
        .count();

    println!();
    println!("Summary:");
    println!("   Files found: {}", results.len());
    println!("   With keyword hits: {}", with_keywords);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_entry_json_shape() {
        let entry = FileEntry {
            url: "http://example.com/file.txt".to_string(),
            size_bytes: 8,
            keywords: vec!["secret".to_string()],
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["url"], "http://example.com/file.txt");
        assert_eq!(json["size_bytes"], 8);
        assert_eq!(json["keywords"][0], "secret");
    }

    #[test]
    fn test_print_results_json_ok() {
        let mut results = BTreeMap::new();
        results.insert(
            "http://example.com/a".to_string(),
            FileEntry {
                url: "http://example.com/a".to_string(),
                size_bytes: 1,
                keywords: vec![],
            },
        );
        assert!(print_results(&results, true).is_ok());
        assert!(print_results(&results, false).is_ok());
    }
}
