//! Content sources
//!
//! The analysis layer never performs I/O itself. A `ContentSource` hands it
//! text for a location, rendered according to a `FetchMode`. Network
//! fetching lives outside this crate; the sources here read local files or
//! serve fixed pages.

use crate::analysis::normalize::collapse_whitespace;
use crate::error::{OracleError, Result};
use crate::types::FetchMode;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// Supplies page text for a location
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch the content at `location` rendered as `mode`
    async fn fetch(&self, location: &str, mode: FetchMode) -> Result<String>;
}

/// Strip markup and collapse the remaining whitespace
///
/// Script and style bodies are dropped entirely; every other tag becomes a
/// space so adjacent blocks do not run together.
pub fn markup_to_text(html: &str) -> String {
    static HIDDEN_BLOCKS: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>|<!--.*?-->")
            .expect("Valid hidden block regex")
    });
    static TAGS: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"<[^>]*>").expect("Valid markup tag regex"));

    let visible = HIDDEN_BLOCKS.replace_all(html, " ");
    let untagged = TAGS.replace_all(&visible, " ");
    collapse_whitespace(&untagged)
}

fn render(raw: String, mode: FetchMode) -> String {
    match mode {
        FetchMode::Html => raw,
        FetchMode::Text => markup_to_text(&raw),
    }
}

/// Reads pages from the local filesystem
///
/// Locations are paths, resolved against `root` when relative. A `file://`
/// prefix is accepted and stripped.
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    root: Option<PathBuf>,
}

impl FileSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative locations against `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, location: &str) -> PathBuf {
        let path = PathBuf::from(location.strip_prefix("file://").unwrap_or(location));
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path,
        }
    }
}

#[async_trait]
impl ContentSource for FileSource {
    async fn fetch(&self, location: &str, mode: FetchMode) -> Result<String> {
        let path = self.resolve(location);
        debug!("Reading {} as {}", path.display(), mode.as_str());

        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| OracleError::Fetch(format!("{}: {}", path.display(), e)))?;

        Ok(render(raw, mode))
    }
}

/// Serves fixed pages from memory
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pages: HashMap<String, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the raw markup served for `location`
    pub fn with_page(mut self, location: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(location.into(), body.into());
        self
    }
}

#[async_trait]
impl ContentSource for StaticSource {
    async fn fetch(&self, location: &str, mode: FetchMode) -> Result<String> {
        let raw = self
            .pages
            .get(location)
            .cloned()
            .ok_or_else(|| OracleError::Fetch(format!("no page registered for {}", location)))?;

        Ok(render(raw, mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_to_text() {
        let html = "<html><head><style>p { color: red; }</style>\
                    <script>var bad = 1;</script></head>\
                    <body><h1>Title</h1><p>First   paragraph</p><!-- hidden --><p>Second</p></body></html>";
        assert_eq!(markup_to_text(html), "Title First paragraph Second");
    }

    #[test]
    fn test_markup_to_text_plain_input() {
        assert_eq!(markup_to_text("no tags here"), "no tags here");
        assert_eq!(markup_to_text(""), "");
    }

    #[tokio::test]
    async fn test_static_source_modes() {
        let source = StaticSource::new().with_page("https://a.test", "<b>bold</b> move");

        let text = source.fetch("https://a.test", FetchMode::Text).await.unwrap();
        assert_eq!(text, "bold move");

        let html = source.fetch("https://a.test", FetchMode::Html).await.unwrap();
        assert_eq!(html, "<b>bold</b> move");
    }

    #[tokio::test]
    async fn test_static_source_missing_page() {
        let err = StaticSource::new()
            .fetch("https://missing.test", FetchMode::Text)
            .await
            .unwrap_err();
        assert!(matches!(err, OracleError::Fetch(_)));
    }

    #[test]
    fn test_file_source_resolution() {
        let source = FileSource::with_root("/srv/pages");
        assert_eq!(source.resolve("a.html"), PathBuf::from("/srv/pages/a.html"));
        assert_eq!(source.resolve("file:///tmp/b.html"), PathBuf::from("/tmp/b.html"));
        assert_eq!(FileSource::new().resolve("c.txt"), PathBuf::from("c.txt"));
    }
}
