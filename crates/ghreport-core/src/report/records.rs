//! Flat output records
//!
//! Issues and merged pull requests share [`IssueRecord`] so bug/non-bug
//! buckets have one shape whichever search filled them.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::github::{ItemState, WorkItem};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueRecord {
    pub number: u64,
    pub title: String,
    pub url: String,
    pub repo: String,
    pub state: String,
    pub created_at: Option<DateTime<Utc>>,
    /// Merge timestamp when present, else the native close timestamp
    pub closed_at: Option<DateTime<Utc>>,
    pub merged_at: Option<DateTime<Utc>>,
    pub labels: Vec<String>,
}

impl IssueRecord {
    pub fn from_issue(item: &WorkItem) -> Self {
        let merged_at = item.merged_at();
        Self {
            number: item.number,
            title: item.title.clone(),
            url: item.html_url.clone(),
            repo: item.repository_name(),
            state: item.state.as_str().to_string(),
            created_at: item.created_at,
            closed_at: merged_at.or(item.closed_at),
            merged_at,
            labels: item.label_names(),
        }
    }

    /// A merged pull request counted as a resolved item: closed at merge time
    pub fn from_merged_pr(item: &WorkItem) -> Self {
        let merged_at = item.merged_at();
        let state = match merged_at {
            Some(_) => ItemState::Closed,
            None => item.state,
        };
        Self {
            state: state.as_str().to_string(),
            closed_at: merged_at,
            ..Self::from_issue(item)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PullRequestRecord {
    pub number: u64,
    pub title: String,
    pub url: String,
    pub repo: String,
    pub merged_at: Option<DateTime<Utc>>,
}

impl From<&WorkItem> for PullRequestRecord {
    fn from(item: &WorkItem) -> Self {
        Self {
            number: item.number,
            title: item.title.clone(),
            url: item.html_url.clone(),
            repo: item.repository_name(),
            merged_at: item.merged_at(),
        }
    }
}

/// CSV cell for an optional timestamp, e.g. `2024-01-20T12:00:00Z`
pub fn timestamp_cell(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_default()
}
