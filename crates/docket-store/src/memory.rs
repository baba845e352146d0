//! In-memory backends.

use crate::error::StoreError;
use crate::traits::{EventSink, Ledger};
use docket_journal::EventRecord;
use std::collections::BTreeMap;

/// Ledger held in a `BTreeMap`.
#[derive(Debug, Default, Clone)]
pub struct MemoryLedger {
    entries: BTreeMap<String, Vec<u8>>,
    writes: usize,
}

impl MemoryLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `put` calls since creation.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Ledger for MemoryLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_vec());
        self.writes += 1;
        Ok(())
    }
}

/// Event sink that keeps every emitted event in order.
#[derive(Debug, Default, Clone)]
pub struct MemoryEventSink {
    events: Vec<EventRecord>,
}

impl MemoryEventSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events emitted so far, oldest first.
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }
}

impl EventSink for MemoryEventSink {
    fn emit(&mut self, name: &str, payload: &[u8]) -> Result<(), StoreError> {
        self.events.push(EventRecord::new(name, payload.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_is_none() {
        let ledger = MemoryLedger::new();
        assert_eq!(ledger.get("missing").unwrap(), None);
    }

    #[test]
    fn put_overwrites() {
        let mut ledger = MemoryLedger::new();
        ledger.put("k", b"one").unwrap();
        ledger.put("k", b"two").unwrap();
        assert_eq!(ledger.get("k").unwrap().unwrap(), b"two");
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.write_count(), 2);
    }

    #[test]
    fn sink_records_in_order() {
        let mut sink = MemoryEventSink::new();
        sink.emit("a", b"1").unwrap();
        sink.emit("b", b"2").unwrap();
        let names: Vec<_> = sink.events().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }
}
