//! Pull request review lists
//!
//! A review list that cannot be read is reported as [`ReviewFetch::Unavailable`];
//! only transport failures are errors.

use super::client::GitHubApi;
use super::models::ReviewRecord;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewFetch {
    Loaded(Vec<ReviewRecord>),
    Unavailable { reason: String },
}

impl ReviewFetch {
    /// Reviews, treating an unavailable list as empty
    pub fn into_reviews(self) -> Vec<ReviewRecord> {
        match self {
            ReviewFetch::Loaded(reviews) => reviews,
            ReviewFetch::Unavailable { .. } => Vec::new(),
        }
    }
}

/// GET `<pr_api_url>/reviews`
pub async fn fetch_reviews(api: &dyn GitHubApi, pr_api_url: &str) -> Result<ReviewFetch> {
    let url = format!("{}/reviews", pr_api_url.trim_end_matches('/'));
    let response = api.get(&url, &[]).await?;

    if !response.is_ok() {
        log::debug!("Reviews unavailable for {}: status {}", pr_api_url, response.status);
        return Ok(ReviewFetch::Unavailable {
            reason: response.status.to_string(),
        });
    }

    match serde_json::from_str::<Vec<ReviewRecord>>(&response.body) {
        Ok(reviews) => {
            log::debug!("{} reviews for {}", reviews.len(), pr_api_url);
            Ok(ReviewFetch::Loaded(reviews))
        }
        Err(e) => {
            log::debug!("Unreadable review list for {}: {}", pr_api_url, e);
            Ok(ReviewFetch::Unavailable { reason: e.to_string() })
        }
    }
}
