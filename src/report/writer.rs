//! Tabular report file output

use crate::report::schema::{AggregatedRecord, REPORT_HEADERS};
use crate::ReportError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the aggregated records as a CSV report
///
/// Columns are fixed to the unified schema order with the localized
/// headers from [`REPORT_HEADERS`], one row per record.
///
/// # Arguments
///
/// * `records` - The normalized rows, already in final order
/// * `output_path` - Path the report file should be written to
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(ReportError)` - Failed to create or write the file
pub fn write_csv_report(records: &[AggregatedRecord], output_path: &Path) -> Result<(), ReportError> {
    let csv = format_csv(records);

    let mut file = File::create(output_path)?;
    file.write_all(csv.as_bytes())?;

    Ok(())
}

/// Formats records as CSV text
pub fn format_csv(records: &[AggregatedRecord]) -> String {
    // Spreadsheet apps need the BOM to detect UTF-8 in the Chinese headers
    let mut out = String::from("\u{feff}");

    out.push_str(&format_row(&REPORT_HEADERS));
    for record in records {
        out.push_str(&format_row(&record.columns()));
    }

    out
}

fn format_row(fields: &[&str]) -> String {
    let mut row = fields
        .iter()
        .map(|f| escape_field(f))
        .collect::<Vec<_>>()
        .join(",");
    row.push_str("\r\n");
    row
}

/// Quotes a field when it contains a delimiter, quote, or line break
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
