//! Catalogue page jobs

use std::fmt;

/// A catalogue page waiting to be fetched
///
/// Jobs are created once at seeding time and handed to exactly one worker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Job {
    url: String,
}

impl Job {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// The list page URL this job fetches
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
