//! Report aggregation and output
//!
//! This module handles:
//! - Scanning the per-platform artifact directories
//! - Normalizing platform-specific records into the unified row schema
//! - Writing the final tabular report

mod aggregate;
mod schema;
mod writer;

pub use aggregate::{aggregate_report, collect_platform_records};
pub use schema::{AggregatedRecord, REPORT_HEADERS};
pub use writer::write_csv_report;

use crate::platform::Platform;
use std::path::PathBuf;

/// The outcome of a completed aggregation
///
/// Finding no data is a normal outcome of a run whose agents produced
/// nothing, not an error; no report file exists in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// A report file was written
    Written(ReportSummary),

    /// No records were found across any platform; nothing was written
    NoData,
}

/// What a written report contains
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    /// Where the report was written
    pub path: PathBuf,

    /// Total row count across all platforms
    pub total_records: usize,

    /// Row count per platform, in report order
    pub platform_counts: Vec<(Platform, usize)>,
}
