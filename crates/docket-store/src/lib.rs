//! Storage collaborators for the Docket service.
//!
//! This crate provides:
//! - `Ledger` and `EventSink` traits, the narrow interfaces the service calls
//! - In-memory backends for tests and embedding
//! - Journal-backed backends using `docket-journal`
//! - Event filtering for selective iteration over recorded events
//!
//! Durability and per-key atomicity are the backend's concern; the service
//! never caches or locks.

#![deny(missing_docs)]

/// Error types for store operations.
pub mod error;
/// Event filtering API.
pub mod filter;
/// Journal-backed storage implementation.
pub mod journal;
/// In-memory storage implementation.
pub mod memory;
/// Storage backend traits.
pub mod traits;

pub use docket_journal::{EventRecord, ReadMode, WriteOptions};
pub use error::StoreError;
pub use filter::{AndFilter, EventFilter, EventNameFilter, EventTypeFilter, FilteredEvents};
pub use journal::{JournalEventReader, JournalEventSink, JournalLedger};
pub use memory::{MemoryEventSink, MemoryLedger};
pub use traits::{EventReader, EventSink, Ledger};
