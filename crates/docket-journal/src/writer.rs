//! Journal writer implementation.

use crate::errors::JournalError;
use crate::frame::{FrameHeader, FrameKind, JournalHeader, FRAME_HEADER_SIZE, HEADER_SIZE};
use crate::record::{EventRecord, StateEntry};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Options for journal writing.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// fsync after every append (default: false).
    pub sync: bool,
    /// Create the file when missing (default: true).
    pub create: bool,
    /// Keep existing frames; when false the file is reset to its header (default: true).
    pub append: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            sync: false,
            create: true,
            append: true,
        }
    }
}

/// Append-only journal writer.
///
/// Each append writes one whole frame and flushes it before returning. With
/// `sync` set the file is also fsynced.
///
/// # Example
///
/// ```rust
/// use docket_journal::{EventRecord, JournalWriter, WriteOptions};
///
/// let dir = tempfile::tempdir()?;
/// let mut writer = JournalWriter::open(dir.path().join("events.dkj"), WriteOptions::default())?;
/// writer.append_event(&EventRecord::new("evtSender", b"{}".to_vec()))?;
/// writer.finish()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct JournalWriter {
    file: File,
    sync: bool,
}

impl JournalWriter {
    /// Opens or creates a journal file for writing.
    ///
    /// An empty file gets a fresh header. A non-empty file must start with a
    /// valid header and is then appended to, or reset to the bare header
    /// when `options.append` is false.
    ///
    /// # Errors
    ///
    /// [`JournalError::NotAJournal`] for a file shorter than a header,
    /// [`JournalError::BadHeader`] for a foreign or unsupported file, and
    /// [`JournalError::Io`] when the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P, options: WriteOptions) -> Result<Self, JournalError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(options.create)
            .truncate(false)
            .open(path)?;
        let mut writer = Self {
            file,
            sync: options.sync,
        };
        writer.prepare(options.append)?;
        Ok(writer)
    }

    fn prepare(&mut self, append: bool) -> Result<(), JournalError> {
        let len = self.file.metadata()?.len();
        match len {
            0 => {
                self.file.write_all(&JournalHeader::default().encode())?;
                self.commit()
            }
            len if len < HEADER_SIZE as u64 => Err(JournalError::NotAJournal { len }),
            _ => {
                let mut raw = [0u8; HEADER_SIZE];
                self.file.seek(SeekFrom::Start(0))?;
                self.file.read_exact(&mut raw)?;
                JournalHeader::decode(&raw)?;
                if !append {
                    self.file.set_len(HEADER_SIZE as u64)?;
                }
                self.file.seek(SeekFrom::End(0))?;
                Ok(())
            }
        }
    }

    /// Appends a ledger state entry.
    pub fn append_state(&mut self, entry: &StateEntry) -> Result<(), JournalError> {
        self.append_raw(FrameKind::StateEntry, &serde_json::to_vec(entry)?)
    }

    /// Appends an event record.
    pub fn append_event(&mut self, event: &EventRecord) -> Result<(), JournalError> {
        self.append_raw(FrameKind::Event, &serde_json::to_vec(event)?)
    }

    /// Appends one frame of `kind` carrying `payload` as-is.
    pub fn append_raw(&mut self, kind: FrameKind, payload: &[u8]) -> Result<(), JournalError> {
        let header = FrameHeader::for_payload(kind, payload)?;
        // A single write so a failure leaves at most a torn tail.
        let mut frame = Vec::with_capacity(FRAME_HEADER_SIZE + payload.len());
        frame.extend_from_slice(&header.encode());
        frame.extend_from_slice(payload);
        self.file.write_all(&frame)?;
        self.commit()
    }

    /// Flushes and closes the journal.
    pub fn finish(mut self) -> Result<(), JournalError> {
        self.commit()
    }

    fn commit(&mut self) -> Result<(), JournalError> {
        self.file.flush()?;
        if self.sync {
            self.file.sync_data()?;
        }
        Ok(())
    }
}

impl Drop for JournalWriter {
    fn drop(&mut self) {
        let _ = self.commit();
    }
}
