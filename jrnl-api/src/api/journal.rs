//! Journal entry endpoints
//!
//! Consumer-facing contract:
//! - `POST /api/journal` upserts a fragment into a day's entry
//! - `GET /api/journal/:year/:month/:day` fetches one day's entry
//! - `GET /api/journal/recent?days=N` lists the previous N days
//! - `GET /api/journal/range?start=..&end=..` lists an inclusive date range
//! - `GET /api/journal/search?category=..&tags=a,b&title=..` filtered search
//! - `GET /api/journal/titled?date=..` legacy day-titled lookup
//! - `GET /api/documents/:id` fetches a document by store id

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use chrono::NaiveDate;
use jrnl_common::models::{ContentDelta, Document, EntryList, SearchPage};
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::services::EntryFilter;
use crate::AppState;

/// Body of `POST /api/journal`
#[derive(Debug, Deserialize)]
pub struct UpsertRequest {
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub title: String,
    /// Body fragment to prepend to the day's entry
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    #[serde(default = "default_days")]
    pub days: u32,
}

fn default_days() -> u32 {
    7
}

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub category: Option<String>,
    /// Comma-separated tag names
    pub tags: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TitledQuery {
    pub date: NaiveDate,
}

/// POST /api/journal
pub async fn upsert_entry(
    State(state): State<AppState>,
    request: Result<Json<UpsertRequest>, JsonRejection>,
) -> ApiResult<Json<Document>> {
    let Json(request) = request?;
    let delta = ContentDelta {
        title: request.title,
        tags: request.tags,
        body: request.body,
    };

    let document = state.upsert.upsert(&request.category, &delta).await?;
    Ok(Json(document))
}

/// GET /api/journal/:year/:month/:day
pub async fn fetch_entry(
    State(state): State<AppState>,
    Path((year, month, day)): Path<(String, String, String)>,
) -> ApiResult<Json<Document>> {
    let category = format!("journal/{}/{}/{}", year, month, day);
    let document = state.upsert.fetch_by_category(&category).await?;
    Ok(Json(document))
}

/// GET /api/journal/recent?days=N
pub async fn recent_entries(
    State(state): State<AppState>,
    query: Result<Query<RecentQuery>, QueryRejection>,
) -> ApiResult<Json<EntryList>> {
    let Query(query) = query?;
    let list = state
        .entries
        .recent_entries(query.days, state.today())
        .await?;
    Ok(Json(list))
}

/// GET /api/journal/range?start=YYYY-MM-DD&end=YYYY-MM-DD
pub async fn entries_between(
    State(state): State<AppState>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> ApiResult<Json<EntryList>> {
    let Query(query) = query?;
    let list = state.entries.entries_between(query.start, query.end).await?;
    Ok(Json(list))
}

/// GET /api/journal/search
pub async fn search_entries(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> ApiResult<Json<EntryList>> {
    let Query(query) = query?;
    let tags: Vec<String> = query
        .tags
        .as_deref()
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let filter = EntryFilter {
        category: query.category,
        tags,
        title: query.title,
    };

    let list = state.entries.search_entries(&filter).await?;
    Ok(Json(list))
}

/// GET /api/journal/titled?date=YYYY-MM-DD
pub async fn search_by_title_of_day(
    State(state): State<AppState>,
    query: Result<Query<TitledQuery>, QueryRejection>,
) -> ApiResult<Json<SearchPage>> {
    let Query(query) = query?;
    let page = state.gateway.search_by_title_of_day(query.date).await?;
    Ok(Json(page))
}

/// GET /api/documents/:id
pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Document>> {
    let id: u64 = id
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("document id must be numeric: {}", id)))?;

    let document = state.gateway.get(id).await?;
    Ok(Json(document))
}
