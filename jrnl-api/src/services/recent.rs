//! Multi-day entry listings
//!
//! Builds one OR query over the requested days and issues a single search,
//! then keeps only results whose category is a strict day key. The store's
//! search can return near matches; those never reach the summaries.

use chrono::NaiveDate;
use jrnl_common::category::{range_before, range_between};
use jrnl_common::models::{EntryList, EntrySummary, SearchPage};
use jrnl_common::query::{category_clause, combine, on_date_or, tags_clause, title_clause};
use jrnl_common::{CategoryKey, Error, Result};

use super::search_gateway::SearchGateway;
use crate::store::{SearchParams, SortKey, SortOrder, MAX_PER_PAGE};

/// Optional filters for [`EntryAggregator::search_entries`]
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub title: Option<String>,
}

/// Read-only listing service over day entries
#[derive(Clone)]
pub struct EntryAggregator {
    gateway: SearchGateway,
}

impl EntryAggregator {
    pub fn new(gateway: SearchGateway) -> Self {
        Self { gateway }
    }

    /// Entries for the `days` days strictly before `today`, most recently updated first
    pub async fn recent_entries(&self, days: u32, today: NaiveDate) -> Result<EntryList> {
        check_day_count(days)?;
        let keys = range_before(days, today)?;
        self.fetch_days(&keys).await
    }

    /// Entries for every day from `start` to `end` inclusive
    pub async fn entries_between(&self, start: NaiveDate, end: NaiveDate) -> Result<EntryList> {
        if start <= end {
            let days = (end - start).num_days() + 1;
            check_day_count(u32::try_from(days).unwrap_or(u32::MAX))?;
        }
        let keys = range_between(start, end)?;
        self.fetch_days(&keys).await
    }

    /// Filtered search over day entries with the default paging
    pub async fn search_entries(&self, filter: &EntryFilter) -> Result<EntryList> {
        let category = match filter.category.as_deref().filter(|c| !c.is_empty()) {
            Some(category) => CategoryKey::parse(category)?.to_string(),
            None => String::new(),
        };

        let query = combine(&[
            category_clause(&category),
            tags_clause(&filter.tags),
            title_clause(filter.title.as_deref().unwrap_or_default()),
        ]);
        if query.is_empty() {
            return Err(Error::InvalidArgument(
                "at least one of category, tags or title is required".to_string(),
            ));
        }

        let page = self.gateway.search(&query).await?;
        Ok(summarize(page))
    }

    async fn fetch_days(&self, keys: &[CategoryKey]) -> Result<EntryList> {
        let params = SearchParams::new(on_date_or(keys))
            .per_page(keys.len() as u32)
            .sort(SortKey::Updated, SortOrder::Desc);

        let page = self.gateway.search_with(&params).await?;
        Ok(summarize(page))
    }
}

/// One search page covers every requested day, so the count is bounded by the page size
fn check_day_count(days: u32) -> Result<()> {
    if days == 0 || days > MAX_PER_PAGE {
        return Err(Error::InvalidArgument(format!(
            "day count must be between 1 and {}, got {}",
            MAX_PER_PAGE, days
        )));
    }
    Ok(())
}

/// Drop near-match categories and map the rest to summaries
pub fn summarize(page: SearchPage) -> EntryList {
    let summaries = page
        .items
        .iter()
        .filter_map(|doc| match CategoryKey::parse(&doc.category) {
            Ok(key) => Some(EntrySummary::new(key, doc)),
            Err(_) => {
                tracing::warn!(
                    id = doc.id,
                    category = %doc.category,
                    "Ignoring search result with non-journal category"
                );
                None
            }
        })
        .collect();

    EntryList {
        summaries,
        total_count: page.total_count,
    }
}
