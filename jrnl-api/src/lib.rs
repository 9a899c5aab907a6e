//! jrnl-api library - one mutable journal entry per calendar day
//!
//! Fronts a remote document store that is reachable only through search.
//! Submitted fragments are merged into the day's entry instead of
//! overwriting it.

use axum::Router;
use chrono::NaiveDate;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod services;
pub mod store;

use services::{EntryAggregator, SearchGateway, UpsertOrchestrator};
use store::DocumentStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub gateway: SearchGateway,
    pub upsert: UpsertOrchestrator,
    pub entries: EntryAggregator,
    /// Pinned "today" for reproducible listings; local date when unset
    fixed_today: Option<NaiveDate>,
}

impl AppState {
    /// Create new application state over a document store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        let gateway = SearchGateway::new(store);
        Self {
            upsert: UpsertOrchestrator::new(gateway.clone()),
            entries: EntryAggregator::new(gateway.clone()),
            gateway,
            fixed_today: None,
        }
    }

    /// Pin the date used as "today" by relative listings
    pub fn with_fixed_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.fixed_today.unwrap_or_else(jrnl_common::time::today)
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let journal = Router::new()
        .route("/api/journal", post(api::upsert_entry))
        .route("/api/journal/recent", get(api::recent_entries))
        .route("/api/journal/range", get(api::entries_between))
        .route("/api/journal/search", get(api::search_entries))
        .route("/api/journal/titled", get(api::search_by_title_of_day))
        .route("/api/journal/:year/:month/:day", get(api::fetch_entry))
        .route("/api/documents/:id", get(api::get_document));

    Router::new()
        .merge(journal)
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
