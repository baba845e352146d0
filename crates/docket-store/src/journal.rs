//! Journal-backed storage.
//!
//! State and events live in separate journal files. The ledger keeps an
//! in-memory index rebuilt by replaying the state journal at open; every
//! `put` appends a new entry, so the last entry per key wins.

use crate::error::StoreError;
use crate::traits::{EventReader, EventSink, Ledger};
use docket_journal::{
    EventRecord, JournalReader, JournalWriter, ReadMode, StateEntry, WriteOptions,
};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

/// Ledger persisted in an append-only journal file.
///
/// A ledger opened with [`JournalLedger::open_read_only`] never touches the
/// file after replay and rejects `put`.
pub struct JournalLedger {
    writer: Option<JournalWriter>,
    index: HashMap<String, Vec<u8>>,
}

impl JournalLedger {
    /// Opens (or creates) the state journal at `path` and replays it.
    ///
    /// In [`ReadMode::Permissive`] a torn trailing frame is cut off before
    /// new entries are appended; in [`ReadMode::Strict`] it is an error.
    pub fn open<P: AsRef<Path>>(
        path: P,
        options: WriteOptions,
        mode: ReadMode,
    ) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let mut index = HashMap::new();

        if options.append && has_content(path)? {
            let (replayed, end) = replay(path, mode)?;
            index = replayed;
            if end < fs::metadata(path)?.len() {
                OpenOptions::new().write(true).open(path)?.set_len(end)?;
            }
        }

        let writer = JournalWriter::open(path, options)?;
        Ok(Self {
            writer: Some(writer),
            index,
        })
    }

    /// Replays the state journal at `path` without opening it for writing.
    ///
    /// A missing or empty file is an empty ledger. A torn tail is left in
    /// place.
    pub fn open_read_only<P: AsRef<Path>>(path: P, mode: ReadMode) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let index = if has_content(path)? {
            replay(path, mode)?.0
        } else {
            HashMap::new()
        };
        Ok(Self {
            writer: None,
            index,
        })
    }
}

fn has_content(path: &Path) -> Result<bool, StoreError> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.len() > 0),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Last value per key, and the offset just past the last complete frame.
fn replay(path: &Path, mode: ReadMode) -> Result<(HashMap<String, Vec<u8>>, u64), StoreError> {
    let mut reader = JournalReader::open(path, mode)?;
    let mut index = HashMap::new();
    while let Some(entry) = reader.read_state()? {
        index.insert(entry.key, entry.value);
    }
    Ok((index, reader.position()))
}

impl Ledger for JournalLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.index.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let writer = self.writer.as_mut().ok_or(StoreError::ReadOnly)?;
        writer.append_state(&StateEntry::new(key, value.to_vec()))?;
        self.index.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// Event sink appending to a journal file.
pub struct JournalEventSink {
    writer: JournalWriter,
}

impl JournalEventSink {
    /// Opens (or creates) the event journal at `path`.
    pub fn open<P: AsRef<Path>>(path: P, options: WriteOptions) -> Result<Self, StoreError> {
        Ok(Self {
            writer: JournalWriter::open(path, options)?,
        })
    }
}

impl EventSink for JournalEventSink {
    fn emit(&mut self, name: &str, payload: &[u8]) -> Result<(), StoreError> {
        self.writer
            .append_event(&EventRecord::new(name, payload.to_vec()))?;
        Ok(())
    }
}

/// Sequential reader over an event journal.
pub struct JournalEventReader {
    reader: JournalReader,
}

impl JournalEventReader {
    /// Opens the event journal at `path`.
    pub fn open<P: AsRef<Path>>(path: P, mode: ReadMode) -> Result<Self, StoreError> {
        Ok(Self {
            reader: JournalReader::open(path, mode)?,
        })
    }
}

impl EventReader for JournalEventReader {
    fn read_next(&mut self) -> Result<Option<EventRecord>, StoreError> {
        Ok(self.reader.read_event()?)
    }
}
