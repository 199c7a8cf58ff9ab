//! Configuration module for Catalogue-Bench
//!
//! The benchmark runs with built-in defaults for the reference catalogue.
//! A TOML file can override any of them.
//!
//! # Example
//!
//! ```no_run
//! use catalogue_bench::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("bench.toml")).unwrap();
//! println!("Multi mode will use {} workers", config.workers.count);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    BenchConfig, CatalogueConfig, EmptyPagePolicy, HttpConfig, WorkerConfig, DEFAULT_BASE_URL,
    DEFAULT_PAGE_PATTERN,
};

pub use parser::{load_config, parse_config};
pub use validation::{validate, MAX_WORKERS};
