//! Review-state analysis of merged pull requests
//!
//! A pull request counts as "rejected then approved" when any of its reviews
//! requested changes. The order of reviews is not checked: a rejection
//! followed by no approval still lands there, since the PR was merged anyway.

use std::collections::BTreeSet;

use crate::dates::DateRange;
use crate::error::Result;
use crate::github::{
    fetch_reviews, review_states, search_all, GitHubApi, ItemFilter, ReviewFetch, ReviewState,
    SearchQuery, WorkItem,
};
use crate::report::{PullRequestRecord, ReviewReport};
use crate::sink::{OutputSink, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
    WithoutRejections,
    RejectedThenApproved,
}

pub fn classify_review_states(states: &BTreeSet<ReviewState>) -> ReviewOutcome {
    if states.contains(&ReviewState::ChangesRequested) {
        ReviewOutcome::RejectedThenApproved
    } else {
        ReviewOutcome::WithoutRejections
    }
}

/// Merged pull requests of `author` in `org` within `range`
pub async fn search_author_merged_prs(
    api: &dyn GitHubApi,
    org: &str,
    author: &str,
    range: DateRange,
    sink: &mut dyn OutputSink,
    verbose: bool,
) -> Result<Vec<WorkItem>> {
    let query = SearchQuery::author_prs_merged(org, author, range);
    if verbose {
        sink.status(&format!("Query di ricerca: {}", query), Tone::Muted);
    }

    let items = search_all(api, &query, ItemFilter::All, |n| {
        if verbose {
            sink.progress(&format!("Trovate {} PR...", n));
        }
    })
    .await?;

    sink.status(
        &format!("✓ Trovate {} PR mergiate nel range indicato.", items.len()),
        Tone::Success,
    );
    Ok(items)
}

/// Fetch reviews for each pull request, one after the other, and classify.
///
/// Items without a pull request reference are skipped.
pub async fn analyze_pull_requests(
    api: &dyn GitHubApi,
    items: &[WorkItem],
    sink: &mut dyn OutputSink,
    verbose: bool,
) -> Result<ReviewReport> {
    let mut report = ReviewReport::default();

    for item in items {
        let Some(pr_url) = item.pull_request_url() else {
            log::debug!("Skipping #{}: not a pull request", item.number);
            continue;
        };

        let reviews = match fetch_reviews(api, pr_url).await? {
            ReviewFetch::Loaded(reviews) => reviews,
            ReviewFetch::Unavailable { reason } => {
                if verbose {
                    sink.status(
                        &format!(
                            "  [WARN] Impossibile leggere le review per {}: {}",
                            pr_url, reason
                        ),
                        Tone::Warning,
                    );
                }
                Vec::new()
            }
        };

        let record = PullRequestRecord::from(item);
        match classify_review_states(&review_states(&reviews)) {
            ReviewOutcome::RejectedThenApproved => report.rejected_then_approved.push(record),
            ReviewOutcome::WithoutRejections => report.without_rejections.push(record),
        }

        if verbose {
            sink.progress(&format!("Analizzate {}/{} PR...", report.total(), items.len()));
        }
    }

    Ok(report)
}
