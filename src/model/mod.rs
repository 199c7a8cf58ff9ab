//! Data model for the scraping pipeline
//!
//! # Components
//!
//! - `Job`: one catalogue page waiting to be fetched
//! - `ItemSummary`: title and absolute link taken from a list page
//! - `ItemDetail`: optional fields taken from a detail page
//! - `EnrichedItem`: a summary with its detail attached

mod item;
mod job;

pub use item::{EnrichedItem, ItemDetail, ItemSummary};
pub use job::Job;
