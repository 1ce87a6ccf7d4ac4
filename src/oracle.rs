//! Contract-style oracle operations
//!
//! Each operation fetches content, runs analysis on it, and only returns once
//! every strict-equality round produced the same serialized result. Rounds
//! fetch independently, as separate validator executions would.

use crate::analysis::{self, AnalysisOptions, ContentReport};
use crate::config::OracleConfig;
use crate::consensus::StrictEquality;
use crate::error::Result;
use crate::source::ContentSource;
use crate::types::{FetchMode, PlatformTag};
use serde::Serialize;
use tracing::{debug, info};

/// Default character limit for scraped snippets
pub const DEFAULT_SCRAPE_LIMIT: usize = 500;

/// Analysis of one fetched location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    pub location: String,
    pub platform: PlatformTag,
    pub report: ContentReport,
}

/// Oracle over a content source
pub struct ContentOracle<S> {
    source: S,
    strict: StrictEquality,
    options: AnalysisOptions,
    scrape_limit: usize,
}

impl<S: ContentSource> ContentOracle<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            strict: StrictEquality::default(),
            options: AnalysisOptions::default(),
            scrape_limit: DEFAULT_SCRAPE_LIMIT,
        }
    }

    /// Build an oracle from loaded configuration
    pub fn from_config(source: S, config: &OracleConfig) -> Result<Self> {
        Ok(Self {
            source,
            strict: StrictEquality::new(config.verify_rounds)?,
            options: config.analysis.clone(),
            scrape_limit: config.scrape_limit,
        })
    }

    pub fn with_options(mut self, options: AnalysisOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_strict(mut self, strict: StrictEquality) -> Self {
        self.strict = strict;
        self
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Fetch text and keep at most the configured number of characters
    pub async fn scrape(&self, location: &str) -> Result<String> {
        info!("Scraping {}", location);
        let source = &self.source;
        let limit = self.scrape_limit;

        self.strict
            .run_async(move || async move {
                let content = source.fetch(location, FetchMode::Text).await?;
                Ok(analysis::limit_chars(&content, limit))
            })
            .await
    }

    /// Report whether `word` appears in the page, ignoring case
    pub async fn check_word(&self, location: &str, word: &str) -> Result<String> {
        info!("Checking {} for '{}'", location, word);
        let source = &self.source;

        self.strict
            .run_async(move || async move {
                let content = source.fetch(location, FetchMode::Text).await?;
                if analysis::search_text(&content, word, false) {
                    Ok(format!("Found '{}'!", word))
                } else {
                    Ok(format!("'{}' not found", word))
                }
            })
            .await
    }

    /// Full content report for the page plus its platform tag
    pub async fn analyze(&self, location: &str) -> Result<SourceReport> {
        info!("Analyzing {}", location);
        let source = &self.source;
        let options = &self.options;

        let report = self
            .strict
            .run_async(move || async move {
                let content = source.fetch(location, FetchMode::Text).await?;
                Ok(analysis::analyze(&content, options))
            })
            .await?;

        let platform = analysis::identify(location);
        debug!("{} classified as {}", location, platform);

        Ok(SourceReport {
            location: location.to_string(),
            platform,
            report,
        })
    }
}
