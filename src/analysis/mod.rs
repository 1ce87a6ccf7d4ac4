//! Deterministic content analysis
//!
//! Pure functions that turn fetched page text into structured signals:
//!
//! - **normalize**: whitespace collapsing, character filtering, word counts
//! - **patterns**: emails, URLs, hashtags, mentions, occurrence counts
//! - **keywords**: keyword presence reports
//! - **sentiment**: fixed-lexicon three-way labels
//! - **summarize**: word-boundary excerpts and hard character limits
//! - **platform**: URL to social platform tags
//!
//! Every function is total over any input, including the empty string, and
//! returns identical output for identical input on every platform. Results
//! feed a cross-execution equality check, so none of them may depend on
//! locale, hash iteration order, or time.

pub mod keywords;
pub mod normalize;
pub mod patterns;
pub mod platform;
pub mod sentiment;
pub mod summarize;

pub use keywords::{match_keywords, search_text};
pub use normalize::{clean, word_count};
pub use patterns::{
    count_occurrences, extract_all, extract_emails, extract_hashtags, extract_mentions,
    extract_urls, ContentPatterns,
};
pub use platform::identify;
pub use sentiment::{classify, SentimentLexicon};
pub use summarize::{limit_chars, summarize};

use crate::types::{Extraction, KeywordReport, SentimentLabel};
use serde::{Deserialize, Serialize};

/// Default summary length in characters
pub const DEFAULT_SUMMARY_LENGTH: usize = 100;

/// Parameters for a full content report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Maximum summary length in characters (marker excluded)
    pub summary_max_length: usize,

    /// Keywords to report on, in report order
    pub keywords: Vec<String>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            summary_max_length: DEFAULT_SUMMARY_LENGTH,
            keywords: Vec::new(),
        }
    }
}

/// Every signal the library derives from one text
///
/// Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentReport {
    pub cleaned: String,
    pub word_count: usize,
    pub extraction: Extraction,
    pub sentiment: SentimentLabel,
    pub summary: String,
    pub keywords: KeywordReport,
}

/// Run every analysis over `text`
///
/// Extraction and sentiment read the raw text; the summary is taken from the
/// cleaned text.
pub fn analyze(text: &str, options: &AnalysisOptions) -> ContentReport {
    let cleaned = clean(text);
    let summary = summarize(&cleaned, options.summary_max_length);

    ContentReport {
        word_count: word_count(text),
        extraction: extract_all(text),
        sentiment: classify(text),
        keywords: match_keywords(text, &options.keywords),
        summary,
        cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_composes_all_signals() {
        let text = "Love the new #GenLayer release!  Ping @dev or mail dev@genlayer.com \
                    see https://genlayer.com/docs";
        let options = AnalysisOptions {
            summary_max_length: 20,
            keywords: vec!["genlayer".to_string(), "solana".to_string()],
        };

        let report = analyze(text, &options);

        assert_eq!(report.word_count, 12);
        assert_eq!(report.extraction.hashtags, vec!["GenLayer"]);
        assert_eq!(report.extraction.mentions, vec!["dev", "genlayer"]);
        assert_eq!(report.extraction.emails, vec!["dev@genlayer.com"]);
        assert_eq!(report.extraction.urls, vec!["https://genlayer.com/docs"]);
        assert_eq!(report.sentiment, SentimentLabel::Positive);
        assert_eq!(report.summary, "Love the new...");
        assert_eq!(report.keywords.get("genlayer"), Some(true));
        assert_eq!(report.keywords.get("solana"), Some(false));
    }

    #[test]
    fn test_analyze_empty_text() {
        let report = analyze("", &AnalysisOptions::default());
        assert_eq!(report.cleaned, "");
        assert_eq!(report.word_count, 0);
        assert!(report.extraction.is_empty());
        assert_eq!(report.sentiment, SentimentLabel::Neutral);
        assert_eq!(report.summary, "");
        assert!(report.keywords.is_empty());
    }

    #[test]
    fn test_report_serialization_is_stable() {
        let options = AnalysisOptions {
            summary_max_length: 50,
            keywords: vec!["b".to_string(), "a".to_string()],
        };
        let first = serde_json::to_vec(&analyze("a b #c @d", &options)).unwrap();
        let second = serde_json::to_vec(&analyze("a b #c @d", &options)).unwrap();
        assert_eq!(first, second);

        let json = String::from_utf8(first).unwrap();
        assert!(json.starts_with(r#"{"cleaned":"a b c d","word_count":4,"#));
        assert!(json.ends_with(r#""keywords":{"b":true,"a":true}}"#));
    }
}
