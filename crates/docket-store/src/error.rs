//! Error types for store operations.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Journal backend error.
    #[error("journal error: {0}")]
    Journal(#[from] docket_journal::JournalError),
    /// Backend refused or could not serve the request.
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    /// Write attempted on a ledger opened read-only.
    #[error("ledger is open read-only")]
    ReadOnly,
}
