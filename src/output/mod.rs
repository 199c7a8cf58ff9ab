//! Output module for run reports
//!
//! This module turns worker reports into run statistics and prints the
//! final summary.

pub mod stats;

pub use stats::{print_report, report_lines, RunStats};
