//! Keyword presence checks

use crate::types::{KeywordHit, KeywordReport};

/// Report which of `keywords` occur in `text`, ignoring case
///
/// One entry per input keyword, in input order. Repeated keywords are each
/// evaluated and kept as separate entries.
pub fn match_keywords<S: AsRef<str>>(text: &str, keywords: &[S]) -> KeywordReport {
    let haystack = text.to_lowercase();

    keywords
        .iter()
        .map(|keyword| {
            let keyword = keyword.as_ref();
            KeywordHit {
                keyword: keyword.to_string(),
                present: haystack.contains(keyword.to_lowercase().as_str()),
            }
        })
        .collect::<Vec<_>>()
        .into()
}

/// Single-term presence test
pub fn search_text(text: &str, term: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        text.contains(term)
    } else {
        text.to_lowercase().contains(term.to_lowercase().as_str())
    }
}
