//! Core data types for the content oracle
//!
//! Every type here serializes to a byte-stable form: field order is fixed by
//! declaration order and no output is built by iterating a hash container.
//! Independent executions compare these serialized bytes for equality.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;
use std::str::FromStr;

/// Three-way sentiment label
///
/// Only the discrete label is exposed; the hit counts behind it stay internal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Social platform a URL originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformTag {
    Twitter,
    Facebook,
    Instagram,
    Linkedin,
    Reddit,
    Youtube,
    Unknown,
}

impl PlatformTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformTag::Twitter => "twitter",
            PlatformTag::Facebook => "facebook",
            PlatformTag::Instagram => "instagram",
            PlatformTag::Linkedin => "linkedin",
            PlatformTag::Reddit => "reddit",
            PlatformTag::Youtube => "youtube",
            PlatformTag::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a content source should render a fetched page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchMode {
    /// Visible text only, markup removed
    #[default]
    Text,
    /// Raw markup as served
    Html,
}

impl FetchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchMode::Text => "text",
            FetchMode::Html => "html",
        }
    }
}

impl FromStr for FetchMode {
    type Err = crate::error::OracleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(FetchMode::Text),
            "html" => Ok(FetchMode::Html),
            other => Err(crate::error::OracleError::InvalidArgument(format!(
                "unknown fetch mode '{}', expected 'text' or 'html'",
                other
            ))),
        }
    }
}

/// Tokens pulled out of a text, one ordered list per pattern kind
///
/// Lists keep source order and duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub emails: Vec<String>,
    pub urls: Vec<String>,
    pub hashtags: Vec<String>,
    pub mentions: Vec<String>,
}

impl Extraction {
    /// True when no pattern matched at all
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
            && self.urls.is_empty()
            && self.hashtags.is_empty()
            && self.mentions.is_empty()
    }
}

/// Presence flag for one requested keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordHit {
    /// Keyword exactly as the caller supplied it
    pub keyword: String,
    pub present: bool,
}

/// Keyword presence report in caller order
///
/// Holds one entry per input keyword, duplicates included. When serialized
/// as a map, a repeated keyword collapses onto its first position; its flag
/// is identical for every repeat, so nothing is lost.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordReport {
    entries: Vec<KeywordHit>,
}

impl KeywordReport {
    pub fn new(entries: Vec<KeywordHit>) -> Self {
        Self { entries }
    }

    /// Presence flag for the first entry with this exact keyword
    pub fn get(&self, keyword: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|hit| hit.keyword == keyword)
            .map(|hit| hit.present)
    }

    pub fn entries(&self) -> &[KeywordHit] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keywords that were found, in caller order
    pub fn found(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|hit| hit.present)
            .map(|hit| hit.keyword.as_str())
    }
}

impl From<Vec<KeywordHit>> for KeywordReport {
    fn from(entries: Vec<KeywordHit>) -> Self {
        Self::new(entries)
    }
}

impl Serialize for KeywordReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seen = HashSet::new();
        let unique: Vec<&KeywordHit> = self
            .entries
            .iter()
            .filter(|hit| seen.insert(hit.keyword.as_str()))
            .collect();

        let mut map = serializer.serialize_map(Some(unique.len()))?;
        for hit in unique {
            map.serialize_entry(&hit.keyword, &hit.present)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(keyword: &str, present: bool) -> KeywordHit {
        KeywordHit {
            keyword: keyword.to_string(),
            present,
        }
    }

    #[test]
    fn test_labels_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&SentimentLabel::Neutral).unwrap(),
            "\"neutral\""
        );
        assert_eq!(
            serde_json::to_string(&PlatformTag::Linkedin).unwrap(),
            "\"linkedin\""
        );
        assert_eq!(PlatformTag::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_fetch_mode_parse() {
        assert_eq!("text".parse::<FetchMode>().unwrap(), FetchMode::Text);
        assert_eq!("html".parse::<FetchMode>().unwrap(), FetchMode::Html);
        assert!("pdf".parse::<FetchMode>().is_err());
        assert_eq!(FetchMode::default(), FetchMode::Text);
    }

    #[test]
    fn test_keyword_report_serializes_in_caller_order() {
        let report = KeywordReport::new(vec![
            hit("zeta", true),
            hit("Alpha", false),
            hit("mid", true),
        ]);
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"zeta":true,"Alpha":false,"mid":true}"#);
    }

    #[test]
    fn test_keyword_report_collapses_duplicates_when_serialized() {
        let report = KeywordReport::new(vec![
            hit("ai", true),
            hit("crypto", false),
            hit("ai", true),
        ]);
        assert_eq!(report.len(), 3);
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"ai":true,"crypto":false}"#);
    }

    #[test]
    fn test_keyword_report_lookup() {
        let report = KeywordReport::new(vec![hit("AI", false), hit("blockchain", true)]);
        assert_eq!(report.get("AI"), Some(false));
        assert_eq!(report.get("ai"), None);
        assert_eq!(report.found().collect::<Vec<_>>(), vec!["blockchain"]);
    }

    #[test]
    fn test_empty_extraction() {
        assert!(Extraction::default().is_empty());
    }
}
