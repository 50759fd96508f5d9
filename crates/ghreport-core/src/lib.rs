//! # ghreport-core
//!
//! Core logic for ghreport - shared by the CLI and its tests.
//!
//! This crate provides:
//! - GitHub REST access: session, search query builder, pagination, reviews (`github` module)
//! - Bug/non-bug and review-state classification (`analysis` module)
//! - Output records, table layouts and JSON/CSV export (`report` module)
//! - The output sink abstraction used for all user-facing text (`sink` module)
//! - Unified error handling (`error` module)

pub mod analysis;
pub mod config;
pub mod dates;
pub mod error;
pub mod github;
pub mod report;
pub mod sink;

// Re-exports for convenience
pub use config::{resolve_token, ClientConfig, API_URL_ENV, DEFAULT_API_URL, TOKEN_ENV};
pub use dates::{validate_date, DateRange};
pub use error::{Error, Result};

pub use analysis::{analyze_issues, analyze_pull_requests, search_author_merged_prs};
pub use github::{
    ApiResponse, GitHubApi, GitHubClient, ItemState, ReviewRecord, ReviewState, SearchQuery,
    WorkItem, PAGE_SIZE,
};
pub use report::{
    BugReport, CategoryBuckets, ExportFormat, IssueRecord, Period, PullRequestRecord,
    ReviewReport, TabularExport,
};
pub use sink::{MemorySink, OutputSink, Panel, ReportTable, Tone};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_version_format() {
        let v = version();
        // Should be semver format: x.y.z
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "Version should be in x.y.z format");
    }
}
