//! GitHub REST access
//!
//! - `client`: authenticated session and the [`GitHubApi`] seam
//! - `query`: structured search query builder
//! - `search`: `/search/issues` pagination until exhaustion
//! - `reviews`: per pull request review lists
//! - `models`: typed response records

mod client;
pub mod models;
pub mod query;
pub mod reviews;
pub mod search;

pub use client::{ApiResponse, GitHubApi, GitHubClient};
pub use models::{
    review_states, ItemState, Label, PullRequestRef, ReviewRecord, ReviewState, SearchPage,
    WorkItem, BUG_LABEL,
};
pub use query::{Clause, SearchQuery};
pub use reviews::{fetch_reviews, ReviewFetch};
pub use search::{search_all, ItemFilter, PAGE_SIZE};

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory [`GitHubApi`] for unit tests

    use async_trait::async_trait;
    use std::sync::Mutex;

    use super::{ApiResponse, GitHubApi};
    use crate::error::Result;

    /// Recorded request: URL plus its query parameters
    #[derive(Debug, Clone)]
    pub struct Request {
        pub url: String,
        pub query: Vec<(String, String)>,
    }

    impl Request {
        pub fn param(&self, key: &str) -> Option<&str> {
            self.query
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        }
    }

    type Handler = Box<dyn Fn(&Request) -> ApiResponse + Send + Sync>;

    pub struct FakeApi {
        handler: Handler,
        pub requests: Mutex<Vec<Request>>,
    }

    impl FakeApi {
        pub fn new(handler: impl Fn(&Request) -> ApiResponse + Send + Sync + 'static) -> Self {
            Self {
                handler: Box::new(handler),
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Serves search pages of the given sizes, then empty pages
        pub fn with_page_sizes(sizes: Vec<usize>) -> Self {
            Self::new(move |req| {
                let page: usize = req.param("page").and_then(|p| p.parse().ok()).unwrap_or(1);
                let size = sizes.get(page - 1).copied().unwrap_or(0);
                let items: Vec<_> = (0..size)
                    .map(|i| issue_json((page * 1000 + i) as u64, "open", &[]))
                    .collect();
                ApiResponse::new(200, search_body(items))
            })
        }

        pub fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl GitHubApi for FakeApi {
        fn base_url(&self) -> &str {
            "https://api.test"
        }

        async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<ApiResponse> {
            let request = Request {
                url: url.to_string(),
                query: query.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
            };
            let response = (self.handler)(&request);
            self.requests.lock().unwrap().push(request);
            Ok(response)
        }
    }

    pub fn issue_json(number: u64, state: &str, labels: &[&str]) -> serde_json::Value {
        serde_json::json!({
            "number": number,
            "title": format!("Item {}", number),
            "html_url": format!("https://github.com/acme/app/issues/{}", number),
            "repository_url": "https://api.github.com/repos/acme/app",
            "state": state,
            "created_at": "2024-01-10T09:00:00Z",
            "closed_at": null,
            "labels": labels.iter().map(|l| serde_json::json!({"name": l})).collect::<Vec<_>>(),
        })
    }

    pub fn pr_json(number: u64, labels: &[&str]) -> serde_json::Value {
        let mut value = issue_json(number, "closed", labels);
        value["html_url"] = format!("https://github.com/acme/app/pull/{}", number).into();
        value["closed_at"] = "2024-01-20T12:00:00Z".into();
        value["pull_request"] = serde_json::json!({
            "url": format!("https://api.github.com/repos/acme/app/pulls/{}", number),
            "merged_at": "2024-01-20T12:00:00Z",
        });
        value
    }

    pub fn search_body(items: Vec<serde_json::Value>) -> String {
        serde_json::json!({
            "total_count": items.len(),
            "incomplete_results": false,
            "items": items,
        })
        .to_string()
    }
}
