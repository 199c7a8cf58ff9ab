//! Catalogue-Bench: a concurrent catalogue scraping benchmark
//!
//! This crate fetches a paginated product catalogue, extracts item summaries
//! from every list page, enriches each item with its detail page, and reports
//! throughput for a single-worker run or a multi-worker run.

pub mod config;
pub mod crawler;
pub mod links;
pub mod model;
pub mod output;

use thiserror::Error;

/// Main error type for Catalogue-Bench operations
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("Worker {id} panicked")]
    WorkerPanicked { id: usize },
}

/// A failed network request
///
/// Every variant means the same thing to the pipeline: the page is unusable.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}")]
    Connect { url: String },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },
}

impl TransportError {
    /// The URL whose request failed
    pub fn url(&self) -> &str {
        match self {
            Self::Timeout { url }
            | Self::Connect { url }
            | Self::Status { url, .. }
            | Self::Body { url, .. }
            | Self::Http { url, .. } => url,
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Catalogue-Bench operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::BenchConfig;
pub use crawler::{Orchestrator, RunMode, RunOutput};
pub use model::{EnrichedItem, ItemDetail, ItemSummary, Job};
pub use output::RunStats;
