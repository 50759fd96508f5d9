//! `/search/issues` pagination
//!
//! Pages are requested in order starting at 1 until a page comes back with
//! fewer than [`PAGE_SIZE`] items. A server that keeps returning full pages is
//! not guarded against; the search API caps total results, which bounds the
//! loop in practice.

use super::client::GitHubApi;
use super::models::{SearchPage, WorkItem};
use super::query::SearchQuery;
use crate::error::{Error, Result};

pub const PAGE_SIZE: usize = 100;

/// Post-fetch filter applied to every page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemFilter {
    #[default]
    All,
    /// Drop items carrying a bug label (any case)
    ExcludeBugLabelled,
}

impl ItemFilter {
    pub fn keeps(&self, item: &WorkItem) -> bool {
        match self {
            ItemFilter::All => true,
            ItemFilter::ExcludeBugLabelled => !item.is_bug(),
        }
    }
}

/// Fetch every page for `query`.
///
/// `on_page` receives the running total after each page. Exhaustion is judged
/// on the raw page size, before `filter` drops anything.
pub async fn search_all(
    api: &dyn GitHubApi,
    query: &SearchQuery,
    filter: ItemFilter,
    mut on_page: impl FnMut(usize),
) -> Result<Vec<WorkItem>> {
    let url = format!("{}/search/issues", api.base_url());
    let q = query.build();
    log::debug!("Search query: {}", q);

    let mut page = 1u32;
    let mut items = Vec::new();

    loop {
        let params = [
            ("q", q.clone()),
            ("per_page", PAGE_SIZE.to_string()),
            ("page", page.to_string()),
        ];
        let response = api.get(&url, &params).await?;

        if !response.is_ok() {
            return Err(Error::from_status(response.status, response.body));
        }

        let data: SearchPage = serde_json::from_str(&response.body)?;
        let fetched = data.items.len();
        if data.incomplete_results {
            log::warn!("Search results for page {} are incomplete", page);
        }
        log::debug!("Page {}: {} items (total_count {})", page, fetched, data.total_count);

        items.extend(data.items.into_iter().filter(|item| filter.keeps(item)));
        on_page(items.len());

        if fetched < PAGE_SIZE {
            break;
        }
        page += 1;
    }

    Ok(items)
}
