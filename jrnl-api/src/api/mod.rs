//! HTTP API handlers for jrnl-api

pub mod health;
pub mod journal;

pub use health::health_routes;
pub use journal::{
    entries_between, fetch_entry, get_document, recent_entries, search_by_title_of_day,
    search_entries, upsert_entry,
};
