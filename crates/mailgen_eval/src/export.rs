//! Report export.
//!
//! Completed evaluation records are written to a pretty-printed JSON report
//! with full detail and a CSV summary with one row of scores per scenario.

use std::path::{Path, PathBuf};

use mailgen_core::evaluation::EvaluationRecord;
use mailgen_core::storage_keys::{report_file_name, summary_file_name};

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/writer_utils.rs"]
mod writer_utils;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub json_report: PathBuf,
    pub csv_summary: PathBuf,
}

/// Export evaluation records to a JSON array.
///
/// # Errors
///
/// Returns an error if file creation or JSON serialization fails.
pub fn export_to_json(
    records: &[EvaluationRecord],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = writer_utils::create_output_file(path)?;
    json::export_to_json_impl(records, file)
}

/// Export the score summary: scenario name followed by the five criterion
/// scores and the overall score.
///
/// # Errors
///
/// Returns an error if file creation or CSV writing fails.
pub fn export_to_csv(
    records: &[EvaluationRecord],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = writer_utils::create_output_file(path)?;
    csv::export_to_csv_impl(records, file)
}

/// Writes both timestamped reports into `report_dir`, creating it if needed.
pub fn write_reports(
    records: &[EvaluationRecord],
    report_dir: impl AsRef<Path>,
    timestamp: &str,
) -> Result<ReportPaths, Box<dyn std::error::Error>> {
    let report_dir = writer_utils::ensure_directory(report_dir)?;
    let paths = ReportPaths {
        json_report: report_dir.join(report_file_name(timestamp)),
        csv_summary: report_dir.join(summary_file_name(timestamp)),
    };

    export_to_json(records, &paths.json_report)?;
    export_to_csv(records, &paths.csv_summary)?;
    Ok(paths)
}
