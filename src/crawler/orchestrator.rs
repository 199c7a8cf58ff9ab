//! Run orchestration
//!
//! The orchestrator seeds the job queue with every catalogue page, runs one
//! worker (single mode) or a fixed number of workers (multi mode), waits for
//! all of them and derives the run statistics.
//!
//! Every worker gets its own OS thread, its own current-thread tokio runtime
//! and its own fetch session. Workers share only the job queue and the result
//! collection. Detail fetches within a worker interleave cooperatively on that
//! worker's runtime.

use crate::config::BenchConfig;
use crate::crawler::fetcher::Fetcher;
use crate::crawler::queue::JobQueue;
use crate::crawler::results::ResultCollection;
use crate::crawler::worker::{Worker, WorkerReport};
use crate::links::{catalogue_base, page_urls};
use crate::model::{EnrichedItem, Job};
use crate::output::RunStats;
use crate::{BenchError, Result};
use std::fmt;
use std::thread;
use std::time::Instant;

/// Worker layout for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Exactly one worker
    Single,

    /// Exactly `workers` workers, each on its own thread
    Multi { workers: usize },
}

impl RunMode {
    /// Maps the command-line switch to a mode
    pub fn from_flag(multithreaded: bool, workers: usize) -> Self {
        if multithreaded {
            Self::Multi { workers }
        } else {
            Self::Single
        }
    }

    pub fn worker_count(&self) -> usize {
        match self {
            Self::Single => 1,
            Self::Multi { workers } => *workers,
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single worker"),
            Self::Multi { workers } => write!(f, "{} workers", workers),
        }
    }
}

/// Everything a finished run produced
#[derive(Debug)]
pub struct RunOutput {
    /// Enriched items in no particular order
    pub items: Vec<EnrichedItem>,
    pub stats: RunStats,
}

/// Seeds jobs, runs workers and collects results
pub struct Orchestrator {
    config: BenchConfig,
    mode: RunMode,
}

impl Orchestrator {
    pub fn new(config: BenchConfig, mode: RunMode) -> Self {
        Self { config, mode }
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// Runs the benchmark to completion
    ///
    /// Blocks the calling thread until every worker has finished. Transport
    /// failures are counted in the returned statistics; only setup failures
    /// (invalid URLs, HTTP client or runtime construction, a panicking
    /// worker) are returned as errors.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use catalogue_bench::{BenchConfig, Orchestrator, RunMode};
    ///
    /// let orchestrator = Orchestrator::new(BenchConfig::default(), RunMode::Multi { workers: 8 });
    /// let output = orchestrator.run().unwrap();
    /// println!("{} items", output.stats.items);
    /// ```
    pub fn run(&self) -> Result<RunOutput> {
        let queue = self.seed_jobs()?;
        let results = ResultCollection::new();
        tracing::info!("Seeded {} page jobs, running {}", queue.len(), self.mode);

        let start = Instant::now();
        let reports = self.run_workers(&queue, &results)?;
        let elapsed = start.elapsed();

        let stats = RunStats::from_reports(self.mode, &reports, elapsed);
        tracing::info!(
            "Run finished: {} items, {} failed items, {} failed pages in {:?}",
            stats.items,
            stats.failed_items,
            stats.failed_pages,
            elapsed
        );

        Ok(RunOutput {
            items: results.into_items(),
            stats,
        })
    }

    /// Builds the queue with one job per catalogue page
    fn seed_jobs(&self) -> Result<JobQueue> {
        let queue = JobQueue::new();
        for url in page_urls(&self.config.catalogue)? {
            queue.put(Job::new(url));
        }
        Ok(queue)
    }

    fn run_workers(
        &self,
        queue: &JobQueue,
        results: &ResultCollection,
    ) -> Result<Vec<WorkerReport>> {
        let count = self.mode.worker_count();

        thread::scope(|scope| -> Result<Vec<WorkerReport>> {
            let handles = (0..count)
                .map(|id| {
                    thread::Builder::new()
                        .name(format!("worker-{}", id))
                        .spawn_scoped(scope, move || self.run_worker(id, queue, results))
                        .map(|handle| (id, handle))
                })
                .collect::<std::io::Result<Vec<_>>>()?;

            handles
                .into_iter()
                .map(|(id, handle)| {
                    handle
                        .join()
                        .unwrap_or_else(|_| Err(BenchError::WorkerPanicked { id }))
                })
                .collect()
        })
    }

    /// Body of one worker thread
    fn run_worker(
        &self,
        id: usize,
        queue: &JobQueue,
        results: &ResultCollection,
    ) -> Result<WorkerReport> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let fetcher = Fetcher::new(&self.config.http)?;
        let base = catalogue_base(&self.config.catalogue)?;
        let worker = Worker::new(id, fetcher, base, self.config.workers.on_empty_page);

        Ok(runtime.block_on(worker.run(queue, results)))
    }
}
