//! Report records, layouts and export
//!
//! Reshapes classified API items into stable output records, lays them out
//! for the terminal and writes JSON/CSV files.

pub mod export;
mod records;
pub mod table;
mod types;

pub use export::{export, export_csv, export_json, to_json_string, ExportFormat};
pub use records::{timestamp_cell, IssueRecord, PullRequestRecord};
pub use table::{render_bug_report, render_review_report};
pub use types::{BugReport, CategoryBuckets, Period, ReviewReport, TabularExport};
