//! Batch quality evaluation for generated emails.
//!
//! Each built-in scenario drives three model calls in sequence: draft the
//! email, score it against a five-criterion rubric, and review it for bias and
//! ethical concerns. Completed scenarios are written to a detailed JSON report
//! and a CSV score summary.
//!
//! # Architecture
//!
//! - [`scenarios`]: the fixed scenario catalogue
//! - [`judge`]: the three per-scenario model calls
//! - [`runner`]: sequential driver with console progress
//! - [`summary`]: console tables and previews
//! - [`export`]: JSON/CSV report files

pub mod export;
pub mod judge;
pub mod runner;
pub mod scenarios;
pub mod summary;

pub use export::{export_to_csv, export_to_json, write_reports, ReportPaths};
pub use judge::ScenarioJudge;
pub use runner::{evaluate_scenario, run_evaluation, ScenarioOutcome};
pub use scenarios::default_scenarios;
