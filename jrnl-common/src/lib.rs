//! # jrnl Common Library
//!
//! Shared code for the journal service crates:
//! - Error taxonomy
//! - Category codec (`journal/YYYY/MM/DD` keys and date ranges)
//! - Search query builder
//! - Document and summary types exchanged with the remote store
//! - Configuration loading
//! - Time helpers

pub mod category;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod time;

pub use category::CategoryKey;
pub use error::{Error, Result};
