//! Content Oracle - Deterministic content analysis for web oracles
//!
//! Turns fetched web text into structured signals that independent
//! executions can compare byte for byte:
//! - Token extraction (emails, URLs, hashtags, mentions)
//! - Keyword presence reports and occurrence counts
//! - Lexicon-based sentiment labels
//! - Word-boundary summaries
//! - Social platform classification of URLs
//!
//! # Architecture
//!
//! - **Analysis**: pure, total, synchronous functions over `&str`
//! - **Types**: serializable results with a fixed byte layout
//! - **Source**: the fetch boundary (`ContentSource`, `FetchMode`)
//! - **Consensus**: strict-equality runner over repeated executions
//! - **Oracle**: scrape / check-word / analyze compositions
//!
//! # Example
//!
//! ```
//! use content_oracle::analysis::{classify, extract_hashtags, summarize};
//! use content_oracle::SentimentLabel;
//!
//! let text = "#GenLayer is amazing! #blockchain";
//! assert_eq!(extract_hashtags(text), vec!["GenLayer", "blockchain"]);
//! assert_eq!(classify(text), SentimentLabel::Positive);
//! assert_eq!(summarize("The quick brown fox jumps", 10), "The quick...");
//! ```

pub mod analysis;
pub mod config;
pub mod consensus;
pub mod error;
pub mod oracle;
pub mod source;
pub mod types;

// Re-export commonly used types
pub use analysis::{AnalysisOptions, ContentReport};
pub use config::OracleConfig;
pub use consensus::StrictEquality;
pub use error::{OracleError, Result};
pub use oracle::{ContentOracle, SourceReport};
pub use source::{ContentSource, FileSource, StaticSource};
pub use types::{
    Extraction, FetchMode, KeywordHit, KeywordReport, PlatformTag, SentimentLabel,
};
