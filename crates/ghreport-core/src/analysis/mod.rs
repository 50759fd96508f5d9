//! Report pipelines
//!
//! - `bugs`: bug vs. non-bug items, open and resolved
//! - `review_stats`: merged pull requests approved directly vs. after changes requested

pub mod bugs;
pub mod review_stats;

pub use bugs::{analyze_issues, BugSearchResults};
pub use review_stats::{
    analyze_pull_requests, classify_review_states, search_author_merged_prs, ReviewOutcome,
};

use crate::error::Result;
use crate::github::{search_all, GitHubApi, ItemFilter, SearchQuery, WorkItem};
use crate::sink::{OutputSink, Tone};

/// Paginated search with verbose progress through the sink
pub(crate) async fn run_search(
    api: &dyn GitHubApi,
    query: &SearchQuery,
    filter: ItemFilter,
    what: &str,
    sink: &mut dyn OutputSink,
    verbose: bool,
) -> Result<Vec<WorkItem>> {
    if verbose {
        sink.status(&format!("Query di ricerca: {}", query), Tone::Muted);
    }

    let items = search_all(api, query, filter, |n| {
        if verbose {
            sink.progress(&format!("Trovate {} {}...", n, what));
        }
    })
    .await?;

    if verbose {
        sink.status(
            &format!("✓ Trovate {} {} nel periodo.", items.len(), what),
            Tone::Success,
        );
    }

    Ok(items)
}
