//! Remote document store seam
//!
//! The store offers no direct key lookup: documents are found through its
//! search endpoint and then written by the id the search revealed. Services
//! depend only on [`DocumentStore`], so tests can substitute an in-memory
//! implementation.

use async_trait::async_trait;
use jrnl_common::models::{Document, DocumentPayload, SearchPage};
use jrnl_common::Result;
use std::fmt;

pub mod http_client;

pub use http_client::HttpDocumentStore;

/// Default page number for searches
pub const DEFAULT_PAGE: u32 = 1;
/// Default page size for searches
pub const DEFAULT_PER_PAGE: u32 = 20;
/// Largest page the store will return in one call
pub const MAX_PER_PAGE: u32 = 100;

/// Result ordering key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    BestMatch,
    Updated,
    Created,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::BestMatch => "best_match",
            SortKey::Updated => "updated",
            SortKey::Created => "created",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result ordering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of one search call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub page: u32,
    pub per_page: u32,
    pub sort: SortKey,
    pub order: SortOrder,
}

impl SearchParams {
    /// Query with the fixed defaults: page 1, 20 per page, best match, descending
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            sort: SortKey::default(),
            order: SortOrder::default(),
        }
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn sort(mut self, sort: SortKey, order: SortOrder) -> Self {
        self.sort = sort;
        self.order = order;
        self
    }
}

/// Operations the remote store exposes
///
/// Implementations must surface store and transport failures unchanged and
/// must not retry.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// `GET /search`
    async fn search(&self, params: &SearchParams) -> Result<SearchPage>;

    /// `GET /documents/{id}`
    async fn get(&self, id: u64) -> Result<Document>;

    /// `POST /documents`
    async fn create(&self, payload: &DocumentPayload) -> Result<Document>;

    /// `PATCH /documents/{id}`
    async fn update(&self, id: u64, payload: &DocumentPayload) -> Result<Document>;
}
