//! Crawler module for the catalogue pipeline
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching with per-request timeouts
//! - List page and detail page parsing
//! - The shared job queue and result collection
//! - Workers and the orchestrator that runs them

mod fetcher;
mod orchestrator;
mod parser;
mod queue;
mod results;
mod worker;

pub use fetcher::{build_http_client, Fetcher};
pub use orchestrator::{Orchestrator, RunMode, RunOutput};
pub use parser::{parse_detail, parse_list_page};
pub use queue::JobQueue;
pub use results::ResultCollection;
pub use worker::{Worker, WorkerReport};
