//! Bug vs. non-bug analysis
//!
//! Four searches feed the report:
//! - bug issues created in the window (`label:bug` in the query)
//! - non-bug issues created in the window (no label clause, bug-labelled
//!   items dropped after the fetch)
//! - bug pull requests merged in the window (`label:bug`)
//! - non-bug pull requests merged in the window (`-label:bug` and the same
//!   post-fetch exclusion)
//!
//! Only issues still open count as open. Resolved means a merged pull request
//! carrying (or not carrying) the label; issues closed without one are not
//! counted anywhere.

use super::run_search;
use crate::dates::DateRange;
use crate::error::Result;
use crate::github::{GitHubApi, ItemFilter, SearchQuery, WorkItem};
use crate::report::{BugReport, CategoryBuckets, IssueRecord, Period};
use crate::sink::{OutputSink, Tone};

/// Raw search results before classification
#[derive(Debug, Clone, Default)]
pub struct BugSearchResults {
    pub bug_issues: Vec<WorkItem>,
    pub non_bug_issues: Vec<WorkItem>,
    pub bug_prs: Vec<WorkItem>,
    pub non_bug_prs: Vec<WorkItem>,
}

/// Run the four searches and classify the results
pub async fn analyze_issues(
    api: &dyn GitHubApi,
    org: &str,
    range: DateRange,
    sink: &mut dyn OutputSink,
    verbose: bool,
) -> Result<BugReport> {
    phase(sink, verbose, "Fase 1: Cercando bug aperti...");
    let bug_issues = run_search(
        api,
        &SearchQuery::issues_created(org, range).bug(),
        ItemFilter::All,
        "bug",
        sink,
        verbose,
    )
    .await?;

    phase(sink, verbose, "Fase 2: Cercando non-bug aperti...");
    let non_bug_issues = run_search(
        api,
        &SearchQuery::issues_created(org, range),
        ItemFilter::ExcludeBugLabelled,
        "non-bug",
        sink,
        verbose,
    )
    .await?;

    phase(sink, verbose, "Fase 3: Cercando bug risolti (PR merged con label bug)...");
    let bug_prs = run_search(
        api,
        &SearchQuery::prs_merged(org, range).bug(),
        ItemFilter::All,
        "PR merged (bug)",
        sink,
        verbose,
    )
    .await?;

    phase(sink, verbose, "Fase 4: Cercando non-bug risolti (PR merged senza label bug)...");
    let non_bug_prs = run_search(
        api,
        &SearchQuery::prs_merged(org, range).not_bug(),
        ItemFilter::ExcludeBugLabelled,
        "PR merged (non-bug)",
        sink,
        verbose,
    )
    .await?;

    let results = BugSearchResults {
        bug_issues,
        non_bug_issues,
        bug_prs,
        non_bug_prs,
    };

    if verbose {
        for (label, n) in [
            ("Bug aperti trovati", results.bug_issues.len()),
            ("Non-bug aperti trovati", results.non_bug_issues.len()),
            ("Bug chiusi trovati", results.bug_prs.len()),
            ("Non-bug chiusi trovati", results.non_bug_prs.len()),
        ] {
            sink.status(&format!("{}: {}", label, n), Tone::Muted);
        }
    }

    let report = classify(results, range);

    if verbose {
        sink.status(
            &format!("Bug aperti ancora aperti: {}", report.bug.open_total()),
            Tone::Muted,
        );
        sink.status(
            &format!("Non-bug aperti ancora aperti: {}", report.non_bug.open_total()),
            Tone::Muted,
        );
    }

    Ok(report)
}

/// Build the report: open buckets keep only items still open, resolved
/// buckets take the merged pull requests as they are
pub fn classify(results: BugSearchResults, range: DateRange) -> BugReport {
    BugReport {
        bug: CategoryBuckets {
            open: still_open(&results.bug_issues),
            resolved: results.bug_prs.iter().map(IssueRecord::from_merged_pr).collect(),
        },
        non_bug: CategoryBuckets {
            open: still_open(&results.non_bug_issues),
            resolved: results.non_bug_prs.iter().map(IssueRecord::from_merged_pr).collect(),
        },
        period: Period {
            from: range.start_str(),
            to: range.end_str(),
        },
    }
}

fn phase(sink: &mut dyn OutputSink, verbose: bool, text: &str) {
    if verbose {
        sink.status(text, Tone::Info);
    }
}

fn still_open(items: &[WorkItem]) -> Vec<IssueRecord> {
    items
        .iter()
        .filter(|item| item.is_open())
        .map(IssueRecord::from_issue)
        .collect()
}
