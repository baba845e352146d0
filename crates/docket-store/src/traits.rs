//! Collaborator traits consumed by the Docket service.

use crate::error::StoreError;
use docket_journal::EventRecord;

/// Key-value ledger.
///
/// An absent key is `Ok(None)`, not an error. A `put` replaces any previous
/// value under the key and is atomic per key; there is no cross-key
/// transaction.
pub trait Ledger {
    /// Returns the bytes stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Stores `value` under `key`, overwriting any previous value.
    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;
}

/// Sink for named events. Fire-and-forget from the caller's perspective.
pub trait EventSink {
    /// Makes the event visible to subscribers.
    fn emit(&mut self, name: &str, payload: &[u8]) -> Result<(), StoreError>;
}

/// Sequential reader over recorded events.
pub trait EventReader {
    /// Returns the next event, or `None` once the source is exhausted.
    fn read_next(&mut self) -> Result<Option<EventRecord>, StoreError>;
}
