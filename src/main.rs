//! Content Oracle command-line interface
//!
//! Runs the analysis library over a file or stdin, and the oracle operations
//! over local pages. Results go to stdout; logs go to stderr.

use clap::{Parser, Subcommand, ValueEnum};
use content_oracle::{
    analysis,
    config::{checked_length, OracleConfig},
    error::Result,
    ContentOracle, FileSource,
};
use serde::Serialize;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "content-oracle")]
#[command(about = "Deterministic content analysis for consensus-checked web oracles", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Set log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Configuration file (TOML)
    #[arg(short, long, env = "CONTENT_ORACLE_CONFIG")]
    config: Option<PathBuf>,

    /// Read input text from this file instead of stdin
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExtractKind {
    Emails,
    Urls,
    Hashtags,
    Mentions,
    All,
}

#[derive(Subcommand)]
enum Commands {
    /// Collapse whitespace and strip disallowed characters
    Clean,

    /// Extract emails, URLs, hashtags or mentions
    Extract {
        /// Pattern kind to extract
        #[arg(value_enum, default_value = "all")]
        kind: ExtractKind,
    },

    /// Count case-insensitive occurrences of a term
    Count {
        term: String,
    },

    /// Report which keywords appear in the text
    Keywords {
        #[arg(required = true)]
        keywords: Vec<String>,
    },

    /// Classify sentiment as positive, negative or neutral
    Sentiment,

    /// Summarize to a maximum length at a word boundary
    Summarize {
        /// Maximum summary length in characters
        #[arg(short, long, allow_negative_numbers = true)]
        max_length: Option<i64>,
    },

    /// Identify the social platform of a URL
    Platform {
        url: String,
    },

    /// Run every analysis and print a JSON report
    Analyze {
        /// Keywords to include in the report (overrides configuration)
        #[arg(short, long)]
        keyword: Vec<String>,
    },

    /// Fetch a local page and keep its first characters
    Scrape {
        location: String,
    },

    /// Check whether a local page mentions a word
    CheckWord {
        location: String,
        word: String,
    },

    /// Fetch a local page and print its full report
    Report {
        location: String,
    },
}

async fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => {
            debug!("Reading input from {}", path.display());
            Ok(tokio::fs::read_to_string(path).await?)
        }
        None => {
            let mut buffer = String::new();
            tokio::io::stdin().read_to_string(&mut buffer).await?;
            Ok(buffer)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::new(format!(
        "content_oracle={}",
        level.as_str().to_lowercase()
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // Write logs to stderr, not stdout
        .init();

    debug!("content-oracle v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = OracleConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Clean => {
            let text = read_input(cli.file.as_ref()).await?;
            println!("{}", analysis::clean(&text));
        }
        Commands::Extract { kind } => {
            let text = read_input(cli.file.as_ref()).await?;
            match kind {
                ExtractKind::Emails => print_json(&analysis::extract_emails(&text))?,
                ExtractKind::Urls => print_json(&analysis::extract_urls(&text))?,
                ExtractKind::Hashtags => print_json(&analysis::extract_hashtags(&text))?,
                ExtractKind::Mentions => print_json(&analysis::extract_mentions(&text))?,
                ExtractKind::All => print_json(&analysis::extract_all(&text))?,
            }
        }
        Commands::Count { term } => {
            let text = read_input(cli.file.as_ref()).await?;
            println!("{}", analysis::count_occurrences(&text, &term));
        }
        Commands::Keywords { keywords } => {
            let text = read_input(cli.file.as_ref()).await?;
            print_json(&analysis::match_keywords(&text, &keywords))?;
        }
        Commands::Sentiment => {
            let text = read_input(cli.file.as_ref()).await?;
            println!("{}", analysis::classify(&text));
        }
        Commands::Summarize { max_length } => {
            let max_length = match max_length {
                Some(value) => checked_length("max_length", value)?,
                None => config.analysis.summary_max_length,
            };
            let text = read_input(cli.file.as_ref()).await?;
            println!("{}", analysis::summarize(&text, max_length));
        }
        Commands::Platform { url } => {
            println!("{}", analysis::identify(&url));
        }
        Commands::Analyze { keyword } => {
            let mut options = config.analysis.clone();
            if !keyword.is_empty() {
                options.keywords = keyword;
            }
            let text = read_input(cli.file.as_ref()).await?;
            print_json(&analysis::analyze(&text, &options))?;
        }
        Commands::Scrape { location } => {
            let oracle = ContentOracle::from_config(FileSource::new(), &config)?;
            println!("{}", oracle.scrape(&location).await?);
        }
        Commands::CheckWord { location, word } => {
            let oracle = ContentOracle::from_config(FileSource::new(), &config)?;
            println!("{}", oracle.check_word(&location, &word).await?);
        }
        Commands::Report { location } => {
            let oracle = ContentOracle::from_config(FileSource::new(), &config)?;
            print_json(&oracle.analyze(&location).await?)?;
        }
    }

    Ok(())
}
