// src/crawl/scan.rs
// =============================================================================
// The content inspector: scans a fetched body for configured keywords.
//
// Rules:
// - Case-insensitive substring containment (both sides lowercased)
// - No regex, no fuzzy matching
// - Output preserves the configured keyword order, listing only the
//   keywords that actually matched
// - An empty keyword list is a no-op, not an error
// =============================================================================

// Returns the keywords found in `body`, in the order they appear in
// `keywords` (not the order they appear in the body).
pub fn find_keywords(body: &str, keywords: &[String]) -> Vec<String> {
    if keywords.is_empty() {
        return Vec::new();
    }

    // Lowercase the body once, then test each keyword against it
    let body_lower = body.to_lowercase();

    keywords
        .iter()
        .filter(|kw| body_lower.contains(&kw.to_lowercase()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_keyword_list_is_noop() {
        assert!(find_keywords("password=hunter2", &[]).is_empty());
    }

    #[test]
    fn test_case_insensitive_match() {
        let found = find_keywords("DB_PASSWORD=hunter2", &kws(&["password"]));
        assert_eq!(found, vec!["password"]);

        let found = find_keywords("secret stuff", &kws(&["SECRET"]));
        assert_eq!(found, vec!["SECRET"]);
    }

    #[test]
    fn test_preserves_configured_order() {
        // "alpha" appears later in the body than "zeta", but the output
        // must follow the configured order, not discovery order
        let body = "zeta comes first in the text, alpha second";
        let found = find_keywords(body, &kws(&["alpha", "beta", "zeta"]));
        assert_eq!(found, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_no_matches() {
        assert!(find_keywords("nothing to see here", &kws(&["password", "key"])).is_empty());
    }

    #[test]
    fn test_substring_not_word_boundary() {
        // "key" matches inside "api_key" - plain substring containment
        let found = find_keywords("api_key=abc123", &kws(&["key"]));
        assert_eq!(found, vec!["key"]);
    }
}
