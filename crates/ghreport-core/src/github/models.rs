//! Typed GitHub API records
//!
//! Only the fields used for classification and output are decoded; everything
//! else in the response is ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Label name that marks an item as a bug (matched case-insensitively)
pub const BUG_LABEL: &str = "bug";

/// Lifecycle state of an issue or pull request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemState {
    Open,
    Closed,
}

impl ItemState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemState::Open => "open",
            ItemState::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    #[serde(default)]
    pub name: String,
}

/// Present on search results that are pull requests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRef {
    /// API URL of the pull request (`.../repos/{owner}/{repo}/pulls/{number}`)
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,
}

/// One issue or pull request returned by `/search/issues`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub repository_url: Option<String>,
    pub state: ItemState,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub pull_request: Option<PullRequestRef>,
}

impl WorkItem {
    /// Repository name: last path segment of `repository_url`, empty if absent
    pub fn repository_name(&self) -> String {
        self.repository_url
            .as_deref()
            .and_then(|url| url.trim_end_matches('/').rsplit('/').next())
            .unwrap_or_default()
            .to_string()
    }

    pub fn label_names(&self) -> Vec<String> {
        self.labels.iter().map(|l| l.name.clone()).collect()
    }

    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l.name.eq_ignore_ascii_case(name))
    }

    pub fn is_bug(&self) -> bool {
        self.has_label(BUG_LABEL)
    }

    pub fn is_open(&self) -> bool {
        self.state == ItemState::Open
    }

    pub fn merged_at(&self) -> Option<DateTime<Utc>> {
        self.pull_request.as_ref().and_then(|pr| pr.merged_at)
    }

    /// API URL of the pull request, if this item is one
    pub fn pull_request_url(&self) -> Option<&str> {
        self.pull_request.as_ref().and_then(|pr| pr.url.as_deref())
    }
}

/// One page of `/search/issues`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default)]
    pub items: Vec<WorkItem>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewState {
    Approved,
    ChangesRequested,
    Commented,
    Dismissed,
    Pending,
    #[default]
    #[serde(other)]
    Unknown,
}

/// One review on a pull request; only the state matters here
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReviewRecord {
    #[serde(default)]
    pub state: ReviewState,
}

/// Distinct states across a pull request's reviews
pub fn review_states(reviews: &[ReviewRecord]) -> BTreeSet<ReviewState> {
    reviews.iter().map(|r| r.state).collect()
}
