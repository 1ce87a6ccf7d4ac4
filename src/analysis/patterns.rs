//! Token extraction over raw fetched text
//!
//! Each extractor applies its own grammar to the whole input and scans left
//! to right without overlap. Extractors are independent, so an email such as
//! `user@domain.com` also yields the mention `domain` when mentions are
//! extracted from the same text. Callers downstream compare outputs across
//! executions, so that overlap stays.

use crate::types::Extraction;
use once_cell::sync::Lazy;
use regex::Regex;

/// Pre-compiled grammars used by the extractors
pub struct ContentPatterns;

impl ContentPatterns {
    /// Email addresses: local@domain.tld with an alphabetic TLD of 2+ letters
    pub fn email() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
                .expect("Valid email regex")
        });
        &PATTERN
    }

    /// URLs: http:// or https:// up to whitespace or a delimiter
    pub fn url() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r#"https?://[^\s<>"{}|\\^`\[\]]+"#).expect("Valid URL regex")
        });
        &PATTERN
    }

    /// Hashtags: `#` followed by letters, numbers, or underscores
    pub fn hashtag() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"#([\p{Alphabetic}\p{N}_]+)").expect("Valid hashtag regex")
        });
        &PATTERN
    }

    /// Mentions: `@` followed by letters, numbers, or underscores
    pub fn mention() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"@([\p{Alphabetic}\p{N}_]+)").expect("Valid mention regex")
        });
        &PATTERN
    }
}

fn whole_matches(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn first_groups(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extract email addresses in order of appearance
pub fn extract_emails(text: &str) -> Vec<String> {
    whole_matches(ContentPatterns::email(), text)
}

/// Extract http(s) URLs in order of appearance
pub fn extract_urls(text: &str) -> Vec<String> {
    whole_matches(ContentPatterns::url(), text)
}

/// Extract hashtags without the leading `#`
pub fn extract_hashtags(text: &str) -> Vec<String> {
    first_groups(ContentPatterns::hashtag(), text)
}

/// Extract mentions without the leading `@`
pub fn extract_mentions(text: &str) -> Vec<String> {
    first_groups(ContentPatterns::mention(), text)
}

/// Run all four extractors over the same text
pub fn extract_all(text: &str) -> Extraction {
    Extraction {
        emails: extract_emails(text),
        urls: extract_urls(text),
        hashtags: extract_hashtags(text),
        mentions: extract_mentions(text),
    }
}

/// Case-insensitive count of non-overlapping occurrences of `term`
///
/// Matches are consumed left to right, so `"aaa"` contains `"aa"` once.
/// An empty term matches at every character boundary of the lowercased text.
pub fn count_occurrences(text: &str, term: &str) -> usize {
    let haystack = text.to_lowercase();
    let needle = term.to_lowercase();
    haystack.matches(needle.as_str()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_emails() {
        assert_eq!(
            extract_emails("contact me at a.b@example.co"),
            vec!["a.b@example.co"]
        );
        assert_eq!(
            extract_emails("ops@genlayer.com, ops@genlayer.com and x@y"),
            vec!["ops@genlayer.com", "ops@genlayer.com"]
        );
    }

    #[test]
    fn test_email_requires_alphabetic_tld() {
        assert!(extract_emails("user@host.c1").is_empty());
        assert_eq!(extract_emails("Mail: Dev@Sub.Example.ORG."), vec!["Dev@Sub.Example.ORG"]);
    }

    #[test]
    fn test_extract_urls_stops_at_delimiters() {
        let text = r#"see <https://example.com/a?b=1> and "http://foo.org/x" or https://bar.io[1]"#;
        assert_eq!(
            extract_urls(text),
            vec!["https://example.com/a?b=1", "http://foo.org/x", "https://bar.io"]
        );
    }

    #[test]
    fn test_extract_urls_keeps_trailing_punctuation() {
        assert_eq!(
            extract_urls("Visit https://genlayer.com."),
            vec!["https://genlayer.com."]
        );
        assert!(extract_urls("ftp://files.example.com").is_empty());
    }

    #[test]
    fn test_extract_hashtags() {
        assert_eq!(
            extract_hashtags("#GenLayer is amazing! #blockchain"),
            vec!["GenLayer", "blockchain"]
        );
        assert_eq!(extract_hashtags("#a_b1 #  # #x#y"), vec!["a_b1", "x", "y"]);
    }

    #[test]
    fn test_extract_mentions() {
        assert_eq!(
            extract_mentions("Hey @user1 and @user2!"),
            vec!["user1", "user2"]
        );
    }

    #[test]
    fn test_email_also_yields_mention() {
        let text = "write to user@domain.com";
        assert_eq!(extract_emails(text), vec!["user@domain.com"]);
        assert_eq!(extract_mentions(text), vec!["domain"]);
    }

    #[test]
    fn test_unicode_word_characters() {
        assert_eq!(extract_hashtags("#café #日本"), vec!["café", "日本"]);
    }

    #[test]
    fn test_tags_include_numeric_symbols() {
        assert_eq!(extract_hashtags("#x² and #½off"), vec!["x²", "½off"]);
        assert_eq!(extract_mentions("@user²"), vec!["user²"]);
    }

    #[test]
    fn test_tags_stop_at_combining_marks() {
        assert_eq!(extract_hashtags("#cafe\u{301}s"), vec!["cafe"]);
        assert_eq!(extract_mentions("@ne\u{301}e"), vec!["ne"]);
    }

    #[test]
    fn test_count_occurrences() {
        assert_eq!(count_occurrences("GenLayer genlayer GENLAYER", "GenLayer"), 3);
        assert_eq!(count_occurrences("aaa", "aa"), 1);
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_occurrences("nothing here", "xyz"), 0);
        assert_eq!(count_occurrences("", "x"), 0);
    }

    #[test]
    fn test_count_empty_term() {
        assert_eq!(count_occurrences("abc", ""), 4);
        assert_eq!(count_occurrences("", ""), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_all("").is_empty());
    }
}
