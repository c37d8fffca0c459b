//! Artifact aggregation
//!
//! Scans each platform's artifact directory, parses whatever JSON files the
//! agents left behind, normalizes every record into the unified schema, and
//! writes the final report. Artifact-level problems are fail-soft: a file
//! that cannot be read or parsed is logged and skipped so one bad artifact
//! does not cost the rest of the report.

use crate::config::ArtifactConfig;
use crate::platform::Platform;
use crate::report::schema::AggregatedRecord;
use crate::report::writer::write_csv_report;
use crate::report::{ReportOutcome, ReportSummary};
use crate::ReportError;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Aggregates all platform artifacts into one report file
///
/// Records are concatenated platform by platform in [`Platform::ALL`] order,
/// never interleaved. If no platform produced any records, nothing is
/// written and [`ReportOutcome::NoData`] is returned.
///
/// # Arguments
///
/// * `artifacts` - The per-platform artifact directories to scan
/// * `output_path` - Destination for the report file
///
/// # Returns
///
/// * `Ok(ReportOutcome::Written)` - Report written; carries path and row counts
/// * `Ok(ReportOutcome::NoData)` - No records found, no file written
/// * `Err(ReportError)` - Failed to write the report file
pub fn aggregate_report(
    artifacts: &ArtifactConfig,
    output_path: &Path,
) -> Result<ReportOutcome, ReportError> {
    let mut records = Vec::new();
    let mut platform_counts = Vec::new();

    for platform in Platform::ALL {
        let platform_records = collect_platform_records(platform, artifacts.dir_for(platform));
        tracing::info!("{}: {} record(s)", platform, platform_records.len());

        platform_counts.push((platform, platform_records.len()));
        records.extend(platform_records);
    }

    if records.is_empty() {
        tracing::warn!("No data found in artifact files");
        return Ok(ReportOutcome::NoData);
    }

    write_csv_report(&records, output_path)?;
    tracing::info!(
        "Report with {} record(s) saved to {}",
        records.len(),
        output_path.display()
    );

    Ok(ReportOutcome::Written(ReportSummary {
        path: output_path.to_path_buf(),
        total_records: records.len(),
        platform_counts,
    }))
}

/// Collects and normalizes all records from one platform's directory
///
/// Files are processed in sorted name order so row order is stable across
/// runs regardless of filesystem enumeration order. A missing directory
/// yields no records.
pub fn collect_platform_records(platform: Platform, dir: &str) -> Vec<AggregatedRecord> {
    let dir = Path::new(dir);
    let mut records = Vec::new();

    for path in list_artifact_files(dir) {
        match parse_artifact_file(platform, &path) {
            Ok(mut file_records) => records.append(&mut file_records),
            Err(e) => {
                tracing::error!("Failed to read {}: {}", path.display(), e);
            }
        }
    }

    records
}

/// Lists the JSON artifact files directly inside a directory, sorted by name
fn list_artifact_files(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json")
        })
        .collect();

    files.sort();
    files
}

/// Parses one artifact file into normalized records
///
/// The file must contain a top-level JSON array; each element becomes one
/// record. Anything else is an error the caller logs and skips.
fn parse_artifact_file(
    platform: Platform,
    path: &Path,
) -> Result<Vec<AggregatedRecord>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let data: Value = serde_json::from_str(&content)?;

    let items = data
        .as_array()
        .ok_or_else(|| format!("expected a top-level array in {}", path.display()))?;

    Ok(items
        .iter()
        .map(|item| AggregatedRecord::from_artifact(platform, item))
        .collect())
}
