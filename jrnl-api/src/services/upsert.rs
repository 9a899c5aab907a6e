//! Upsert orchestrator
//!
//! Keeps at most one document per category. Each call performs exactly one
//! search by category and then at most one write:
//!
//! | matches | action                                   |
//! |---------|------------------------------------------|
//! | 0       | create from the delta verbatim           |
//! | 1       | merge delta into it, update by its id    |
//! | >1      | fail with `MultipleEntries`, no write    |
//!
//! Search and write are not atomic: another writer landing in between is not
//! detected.

use jrnl_common::models::{ContentDelta, Document, DocumentPayload, SearchPage};
use jrnl_common::query::category_clause;
use jrnl_common::{CategoryKey, Error, Result};

use super::merge::{merge_body, merge_tags, merge_title};
use super::search_gateway::SearchGateway;

/// Create-or-merge writer for day entries
#[derive(Clone)]
pub struct UpsertOrchestrator {
    gateway: SearchGateway,
}

impl UpsertOrchestrator {
    pub fn new(gateway: SearchGateway) -> Self {
        Self { gateway }
    }

    /// Merge `delta` into the entry for `category`, creating it if absent
    ///
    /// The category is validated before any remote call.
    pub async fn upsert(&self, category: &str, delta: &ContentDelta) -> Result<Document> {
        let key = CategoryKey::parse(category)?;
        let found = self.search_category(&key).await?;

        match found.total_count {
            0 => self.create(&key, delta).await,
            1 => {
                let existing = single_item(&key, found)?;
                self.update(&key, existing, delta).await
            }
            count => Err(multiple_entries(&key, count)),
        }
    }

    /// Read-only lookup of the entry for `category`
    pub async fn fetch_by_category(&self, category: &str) -> Result<Document> {
        let key = CategoryKey::parse(category)?;
        let found = self.search_category(&key).await?;

        match found.total_count {
            0 => Err(Error::NotFound(format!("no entry for category {}", key))),
            1 => single_item(&key, found),
            count => Err(multiple_entries(&key, count)),
        }
    }

    async fn search_category(&self, key: &CategoryKey) -> Result<SearchPage> {
        tracing::debug!(category = %key, "Looking up entry by category");
        self.gateway.search(&category_clause(key.as_str())).await
    }

    async fn create(&self, key: &CategoryKey, delta: &ContentDelta) -> Result<Document> {
        let payload = DocumentPayload {
            title: delta.title.clone(),
            category: key.to_string(),
            tags: delta.tags.clone(),
            body: delta.body.clone(),
        };

        let created = self.gateway.create(&payload).await?;
        tracing::info!(category = %key, id = created.id, "Created journal entry");
        Ok(created)
    }

    async fn update(
        &self,
        key: &CategoryKey,
        existing: Document,
        delta: &ContentDelta,
    ) -> Result<Document> {
        let payload = merged_payload(key, &existing, delta);

        let updated = self.gateway.update(existing.id, &payload).await?;
        tracing::info!(
            category = %key,
            id = updated.id,
            title = %updated.title,
            "Merged fragment into journal entry"
        );
        Ok(updated)
    }
}

/// Payload combining a stored document with an incoming delta
pub fn merged_payload(key: &CategoryKey, existing: &Document, delta: &ContentDelta) -> DocumentPayload {
    DocumentPayload {
        title: merge_title(&existing.title, &delta.title),
        category: key.to_string(),
        tags: merge_tags(&existing.tags, &delta.tags),
        body: merge_body(&existing.body_md, &delta.body),
    }
}

fn single_item(key: &CategoryKey, page: SearchPage) -> Result<Document> {
    page.items.into_iter().next().ok_or_else(|| {
        Error::Parse(format!(
            "store reported one match for {} but returned no items",
            key
        ))
    })
}

fn multiple_entries(key: &CategoryKey, count: u64) -> Error {
    tracing::warn!(
        category = %key,
        count,
        "More than one entry shares a category; refusing to write"
    );
    Error::MultipleEntries {
        category: key.to_string(),
        count,
    }
}
