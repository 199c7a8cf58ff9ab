//! Run statistics
//!
//! Statistics are derived once, after every worker has joined, from the
//! per-worker reports and the measured wall time.

use crate::crawler::{RunMode, WorkerReport};
use std::time::Duration;

/// Aggregate statistics for one benchmark run
#[derive(Debug, Clone, PartialEq)]
pub struct RunStats {
    pub mode: RunMode,

    /// Enriched items collected
    pub items: usize,

    /// Items dropped because their detail page failed
    pub failed_items: usize,

    /// Jobs taken from the queue across all workers
    pub pages_taken: usize,

    /// List pages whose fetch failed
    pub failed_pages: usize,

    /// Workers that stopped on an empty list page
    pub workers_stopped_early: usize,

    /// Wall time from the end of seeding until the last worker joined
    pub elapsed: Duration,
}

impl RunStats {
    /// Sums worker reports into run statistics
    pub fn from_reports(mode: RunMode, reports: &[WorkerReport], elapsed: Duration) -> Self {
        let mut stats = Self {
            mode,
            items: 0,
            failed_items: 0,
            pages_taken: 0,
            failed_pages: 0,
            workers_stopped_early: 0,
            elapsed,
        };

        for report in reports {
            stats.items += report.items;
            stats.failed_items += report.failed_items;
            stats.pages_taken += report.pages_taken;
            stats.failed_pages += report.failed_pages;
            if report.stopped_early {
                stats.workers_stopped_early += 1;
            }
        }

        stats
    }

    /// Items per second of wall time; zero when no time elapsed
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.items as f64 / secs
        } else {
            0.0
        }
    }

    /// Returns true if no page or item failed
    pub fn is_clean(&self) -> bool {
        self.failed_items == 0 && self.failed_pages == 0
    }

    /// One-line human-readable summary
    pub fn summary_line(&self) -> String {
        format!(
            "Scraped {} items. Total time: {:.2}s. Speed: {:.0} items/sec",
            self.items,
            self.elapsed.as_secs_f64(),
            self.throughput()
        )
    }

    /// One-line failure summary
    pub fn failure_line(&self) -> String {
        format!(
            "Failed items: {}. Failed list pages: {}.",
            self.failed_items, self.failed_pages
        )
    }
}

/// Lines of the final report, after the blank separator
pub fn report_lines(stats: &RunStats) -> Vec<String> {
    let mut lines = vec![stats.summary_line()];

    if stats.is_clean() {
        lines.push(format!("Completed cleanly ({} pages, {}).", stats.pages_taken, stats.mode));
    } else {
        lines.push(format!(
            "Completed with errors ({} pages, {}). {}",
            stats.pages_taken,
            stats.mode,
            stats.failure_line()
        ));
    }

    if stats.workers_stopped_early > 0 {
        lines.push(format!(
            "Workers stopped early on an empty list page: {}.",
            stats.workers_stopped_early
        ));
    }

    lines
}

/// Prints the final report to stdout
pub fn print_report(stats: &RunStats) {
    println!();
    for line in report_lines(stats) {
        println!("{}", line);
    }
}
