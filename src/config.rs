//! Configuration loading for the content oracle
//!
//! Settings come from an optional TOML file, then environment variables:
//! - `CONTENT_ORACLE_SUMMARY_MAX_LENGTH`
//! - `CONTENT_ORACLE_SCRAPE_LIMIT`
//! - `CONTENT_ORACLE_VERIFY_ROUNDS`
//!
//! Environment variables win over the file. Lengths are read as signed
//! integers so a negative value is reported as an invalid argument instead
//! of a parse failure, and never reaches the analysis layer.

use crate::analysis::{AnalysisOptions, DEFAULT_SUMMARY_LENGTH};
use crate::consensus::DEFAULT_ROUNDS;
use crate::error::{OracleError, Result};
use crate::oracle::DEFAULT_SCRAPE_LIMIT;
use serde::Deserialize;
use std::env;
use std::path::Path;
use tracing::{debug, info};

const ENV_SUMMARY_MAX_LENGTH: &str = "CONTENT_ORACLE_SUMMARY_MAX_LENGTH";
const ENV_SCRAPE_LIMIT: &str = "CONTENT_ORACLE_SCRAPE_LIMIT";
const ENV_VERIFY_ROUNDS: &str = "CONTENT_ORACLE_VERIFY_ROUNDS";

/// Validated oracle configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleConfig {
    pub analysis: AnalysisOptions,

    /// Maximum characters kept by `scrape`
    pub scrape_limit: usize,

    /// Strict-equality rounds per operation (at least 1)
    pub verify_rounds: usize,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            analysis: AnalysisOptions::default(),
            scrape_limit: DEFAULT_SCRAPE_LIMIT,
            verify_rounds: DEFAULT_ROUNDS,
        }
    }
}

/// File layout before validation
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    scrape_limit: Option<i64>,
    verify_rounds: Option<i64>,
    #[serde(default)]
    analysis: RawAnalysis,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAnalysis {
    summary_max_length: Option<i64>,
    keywords: Option<Vec<String>>,
}

/// Convert a caller-supplied length, rejecting negatives
pub fn checked_length(name: &str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        OracleError::InvalidArgument(format!("{} must not be negative, got {}", name, value))
    })
}

fn parse_env_int(name: &str, value: &str) -> Result<i64> {
    value.trim().parse::<i64>().map_err(|e| {
        OracleError::InvalidArgument(format!("{} is not an integer ('{}'): {}", name, value, e))
    })
}

impl OracleConfig {
    /// Load from an optional TOML file plus the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let contents = match path {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                Some(std::fs::read_to_string(path)?)
            }
            None => None,
        };
        let config = Self::from_sources(contents.as_deref(), |name| env::var(name).ok())?;
        info!(
            "Configuration loaded (summary_max_length={}, scrape_limit={}, verify_rounds={})",
            config.analysis.summary_max_length, config.scrape_limit, config.verify_rounds
        );
        Ok(config)
    }

    /// Parse TOML text without consulting the environment
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Self::from_sources(Some(contents), |_| None)
    }

    /// Combine file contents with an environment lookup and validate
    pub fn from_sources<F>(contents: Option<&str>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut raw: RawConfig = match contents {
            Some(text) => toml::from_str(text)?,
            None => RawConfig::default(),
        };

        if let Some(value) = lookup(ENV_SUMMARY_MAX_LENGTH) {
            debug!("Using {} from environment", ENV_SUMMARY_MAX_LENGTH);
            raw.analysis.summary_max_length = Some(parse_env_int(ENV_SUMMARY_MAX_LENGTH, &value)?);
        }
        if let Some(value) = lookup(ENV_SCRAPE_LIMIT) {
            debug!("Using {} from environment", ENV_SCRAPE_LIMIT);
            raw.scrape_limit = Some(parse_env_int(ENV_SCRAPE_LIMIT, &value)?);
        }
        if let Some(value) = lookup(ENV_VERIFY_ROUNDS) {
            debug!("Using {} from environment", ENV_VERIFY_ROUNDS);
            raw.verify_rounds = Some(parse_env_int(ENV_VERIFY_ROUNDS, &value)?);
        }

        raw.validate()
    }
}

impl RawConfig {
    fn validate(self) -> Result<OracleConfig> {
        let summary_max_length = match self.analysis.summary_max_length {
            Some(value) => checked_length("summary_max_length", value)?,
            None => DEFAULT_SUMMARY_LENGTH,
        };
        let scrape_limit = match self.scrape_limit {
            Some(value) => checked_length("scrape_limit", value)?,
            None => DEFAULT_SCRAPE_LIMIT,
        };
        let verify_rounds = match self.verify_rounds {
            Some(value) => checked_length("verify_rounds", value)?,
            None => DEFAULT_ROUNDS,
        };
        if verify_rounds == 0 {
            return Err(OracleError::InvalidArgument(
                "verify_rounds must be at least 1".to_string(),
            ));
        }

        Ok(OracleConfig {
            analysis: AnalysisOptions {
                summary_max_length,
                keywords: self.analysis.keywords.unwrap_or_default(),
            },
            scrape_limit,
            verify_rounds,
        })
    }
}
