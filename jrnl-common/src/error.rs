//! Common error types for jrnl

use thiserror::Error;

/// Common result type for jrnl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy shared by the store client and the journal services
///
/// Only `InvalidArgument` is raised without touching the network. Remote
/// failures are surfaced as-is; nothing here is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed category or date, detected before any I/O
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Read-only lookup found no document
    #[error("Not found: {0}")]
    NotFound(String),

    /// More than one document shares a category
    #[error("Multiple entries ({count}) found for category {category}")]
    MultipleEntries { category: String, count: u64 },

    /// Structured error body returned by the remote store.
    ///
    /// Display format `<error>: <message>` is part of the external contract.
    #[error("{error}: {message}")]
    RemoteApi { error: String, message: String },

    /// Network or timeout failure talking to the remote store
    #[error("Transport error: {0}")]
    Transport(String),

    /// Remote response could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
