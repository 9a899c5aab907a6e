//! Types exchanged with the remote document store and the HTTP surface

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::category::CategoryKey;

/// Journal entry as owned by the remote store
///
/// The id is assigned by the store and only ever discovered through search.
/// `category` is kept as the raw string so near-miss categories returned by
/// the store can still be inspected and filtered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: u64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub title: String,
    /// Markdown source
    #[serde(default, alias = "body_md")]
    pub body_md: String,
    /// Rendered form produced by the store
    #[serde(default, alias = "body_html")]
    pub body_html: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, alias = "created_at")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "updated_at")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Body of create and update calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPayload {
    pub title: String,
    pub category: String,
    pub tags: Vec<String>,
    pub body: String,
}

/// One page of search results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default)]
    pub items: Vec<Document>,
    #[serde(default, alias = "total_count")]
    pub total_count: u64,
}

/// Caller-supplied increment for a day's entry; never a full document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDelta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Body fragment to prepend
    #[serde(default)]
    pub body: String,
}

/// Compact listing row for multi-day views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySummary {
    pub date: NaiveDate,
    pub title: String,
    pub tags: Vec<String>,
    pub category: CategoryKey,
    pub updated_at: Option<DateTime<Utc>>,
    pub id: u64,
}

impl EntrySummary {
    /// Summarize a document whose category already passed strict validation
    pub fn new(category: CategoryKey, doc: &Document) -> Self {
        Self {
            date: category.date(),
            title: doc.title.clone(),
            tags: doc.tags.clone(),
            category,
            updated_at: doc.updated_at,
            id: doc.id,
        }
    }
}

/// Summaries plus the store's total hit count
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryList {
    pub summaries: Vec<EntrySummary>,
    pub total_count: u64,
}
