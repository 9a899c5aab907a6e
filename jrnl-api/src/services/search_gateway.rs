//! Search gateway
//!
//! Thin, typed front for the store's search endpoint. Every call is exactly
//! one remote request; failures propagate untouched.

use chrono::{Datelike, NaiveDate};
use jrnl_common::models::{Document, DocumentPayload, SearchPage};
use jrnl_common::query::{category_month_clause, combine, title_clause};
use jrnl_common::Result;
use std::sync::Arc;

use crate::store::{DocumentStore, SearchParams};

/// Shared handle on the remote store
#[derive(Clone)]
pub struct SearchGateway {
    store: Arc<dyn DocumentStore>,
}

impl SearchGateway {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Search with the fixed defaults (page 1, 20 per page, best match, desc)
    pub async fn search(&self, query: &str) -> Result<SearchPage> {
        self.search_with(&SearchParams::new(query)).await
    }

    /// Search with explicit paging and ordering
    pub async fn search_with(&self, params: &SearchParams) -> Result<SearchPage> {
        let page = self.store.search(params).await?;
        tracing::debug!(
            q = %params.query,
            total_count = page.total_count,
            returned = page.items.len(),
            "Search completed"
        );
        Ok(page)
    }

    /// Legacy lookup for entries titled by day, e.g. `6月5日`
    ///
    /// Restricted to the date's month; month and day are written without
    /// leading zeros.
    pub async fn search_by_title_of_day(&self, date: NaiveDate) -> Result<SearchPage> {
        let query = combine(&[
            category_month_clause(date.year(), date.month()),
            title_clause(&format!("{}月{}日", date.month(), date.day())),
        ]);
        self.search(&query).await
    }

    pub async fn get(&self, id: u64) -> Result<Document> {
        self.store.get(id).await
    }

    pub async fn create(&self, payload: &DocumentPayload) -> Result<Document> {
        self.store.create(payload).await
    }

    pub async fn update(&self, id: u64, payload: &DocumentPayload) -> Result<Document> {
        self.store.update(id, payload).await
    }
}
