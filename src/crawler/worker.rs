//! Worker pull loop
//!
//! A worker drains the shared job queue one list page at a time. For every
//! list page it fans out the detail fetches of all items on that page, joins
//! them, and appends the batch before pulling the next job.
//!
//! ```text
//! Pulling → FetchingList → ParsingList → FetchingDetails (fan-out, join) → Appending → Pulling
//! ```

use crate::config::EmptyPagePolicy;
use crate::crawler::fetcher::Fetcher;
use crate::crawler::parser::{parse_detail, parse_list_page};
use crate::crawler::queue::JobQueue;
use crate::crawler::results::ResultCollection;
use crate::model::{EnrichedItem, ItemSummary, Job};
use crate::TransportError;
use futures::future::join_all;
use url::Url;

/// Counters reported by one worker when its pull loop ends
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerReport {
    pub worker_id: usize,

    /// Jobs taken from the queue
    pub pages_taken: usize,

    /// List pages whose fetch failed
    pub failed_pages: usize,

    /// Items appended to the result collection
    pub items: usize,

    /// Items whose detail page could not be fetched
    pub failed_items: usize,

    /// Whether the loop ended on an empty list page rather than an empty queue
    pub stopped_early: bool,
}

impl WorkerReport {
    fn new(worker_id: usize) -> Self {
        Self {
            worker_id,
            ..Self::default()
        }
    }
}

/// One pipeline worker owning its fetch session
pub struct Worker {
    id: usize,
    fetcher: Fetcher,
    base: Url,
    on_empty_page: EmptyPagePolicy,
}

impl Worker {
    pub fn new(id: usize, fetcher: Fetcher, base: Url, on_empty_page: EmptyPagePolicy) -> Self {
        Self {
            id,
            fetcher,
            base,
            on_empty_page,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Drains `queue` until it is empty or the empty-page policy stops the loop
    ///
    /// Transport failures never abort the loop. A failed list page counts as
    /// a page with zero items; a failed detail page drops only that item.
    pub async fn run(&self, queue: &JobQueue, results: &ResultCollection) -> WorkerReport {
        let mut report = WorkerReport::new(self.id);
        tracing::debug!("Worker {} started", self.id);

        while let Some(job) = queue.try_take() {
            report.pages_taken += 1;

            let summaries = match self.fetch_list_page(&job).await {
                Ok(summaries) => summaries,
                Err(e) => {
                    tracing::warn!("Worker {}: list page failed: {}", self.id, e);
                    report.failed_pages += 1;
                    Vec::new()
                }
            };

            if summaries.is_empty() {
                match self.on_empty_page {
                    EmptyPagePolicy::Stop => {
                        tracing::info!("Worker {}: no items on {}, stopping", self.id, job);
                        report.stopped_early = true;
                        break;
                    }
                    EmptyPagePolicy::Skip => {
                        tracing::debug!("Worker {}: no items on {}, skipping", self.id, job);
                        continue;
                    }
                }
            }

            let found = summaries.len();
            let outcomes = join_all(summaries.into_iter().map(|s| self.enrich(s))).await;

            let mut batch = Vec::with_capacity(found);
            for outcome in outcomes {
                match outcome {
                    Ok(item) => batch.push(item),
                    Err(e) => {
                        tracing::warn!("Worker {}: detail page failed: {}", self.id, e);
                        report.failed_items += 1;
                    }
                }
            }

            tracing::debug!(
                "Worker {}: {} enriched {}/{} items",
                self.id,
                job,
                batch.len(),
                found
            );
            report.items += batch.len();
            results.extend(batch);
        }

        tracing::debug!(
            "Worker {} finished: {} pages, {} items, {} failed items",
            self.id,
            report.pages_taken,
            report.items,
            report.failed_items
        );
        report
    }

    async fn fetch_list_page(&self, job: &Job) -> Result<Vec<ItemSummary>, TransportError> {
        let body = self.fetcher.fetch(job.url()).await?;
        Ok(parse_list_page(&body, &self.base))
    }

    async fn enrich(&self, summary: ItemSummary) -> Result<EnrichedItem, TransportError> {
        let body = self.fetcher.fetch(&summary.link).await?;
        let detail = parse_detail(&body);
        Ok(EnrichedItem::new(summary, detail))
    }
}
