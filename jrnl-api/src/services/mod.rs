//! Journal services built on the remote store

pub mod merge;
pub mod recent;
pub mod search_gateway;
pub mod upsert;

pub use merge::{merge_body, merge_tags, merge_title, MergedTitle, SENTINEL_TITLE};
pub use recent::{EntryAggregator, EntryFilter};
pub use search_gateway::SearchGateway;
pub use upsert::UpsertOrchestrator;
