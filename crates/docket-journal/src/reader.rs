//! Journal reader implementation.

use crate::errors::JournalError;
use crate::frame::{FrameHeader, FrameKind, JournalHeader, FRAME_HEADER_SIZE, HEADER_SIZE};
use crate::record::{EventRecord, Record, StateEntry};
use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// How a reader treats a file that ends partway through a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// A torn frame is an error.
    Strict,
    /// A torn frame is the end of the journal.
    Permissive,
}

/// Sequential journal reader.
///
/// [`position`](Self::position) always sits on a frame boundary: it only
/// moves past a frame once the whole frame has been read.
pub struct JournalReader {
    input: BufReader<File>,
    mode: ReadMode,
    position: u64,
}

impl JournalReader {
    /// Opens a journal and checks its header.
    ///
    /// # Errors
    ///
    /// [`JournalError::BadHeader`] for a foreign or unsupported file and
    /// [`JournalError::Io`] when the file cannot be opened or is shorter than
    /// a header.
    pub fn open<P: AsRef<Path>>(path: P, mode: ReadMode) -> Result<Self, JournalError> {
        let mut input = BufReader::new(File::open(path)?);
        let mut raw = [0u8; HEADER_SIZE];
        input.read_exact(&mut raw)?;
        JournalHeader::decode(&raw)?;
        Ok(Self {
            input,
            mode,
            position: HEADER_SIZE as u64,
        })
    }

    /// Offset just past the last complete frame read.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Reads as much of `buf` as the file holds, returning the count.
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.input.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }

    fn torn(&mut self, offset: u64) -> Result<Option<(FrameKind, Vec<u8>)>, JournalError> {
        // Rewind so a later call sees the frame again if the file grows.
        self.input.seek(SeekFrom::Start(offset))?;
        match self.mode {
            ReadMode::Permissive => Ok(None),
            ReadMode::Strict => Err(JournalError::TornFrame { offset }),
        }
    }

    /// Reads the next raw frame.
    ///
    /// Returns `Ok(None)` at the end of the journal, and at a torn frame in
    /// permissive mode.
    pub fn read_frame(&mut self) -> Result<Option<(FrameKind, Vec<u8>)>, JournalError> {
        let start = self.position;
        let mut raw = [0u8; FRAME_HEADER_SIZE];
        match self.fill(&mut raw)? {
            0 => return Ok(None),
            n if n < FRAME_HEADER_SIZE => return self.torn(start),
            _ => {}
        }
        let header = FrameHeader::decode(&raw).map_err(|fault| JournalError::BadFrame {
            offset: start,
            fault,
        })?;

        let mut payload = vec![0u8; header.len as usize];
        if self.fill(&mut payload)? < payload.len() {
            return self.torn(start);
        }

        self.position = start + (FRAME_HEADER_SIZE + payload.len()) as u64;
        Ok(Some((header.kind, payload)))
    }

    /// Reads the next decoded record, skipping unknown frame kinds.
    ///
    /// # Errors
    ///
    /// [`JournalError::BadFrame`] for a malformed frame header,
    /// [`JournalError::Payload`] for a payload that is not record JSON, and
    /// [`JournalError::TornFrame`] for a torn frame in strict mode.
    pub fn read_record(&mut self) -> Result<Option<Record>, JournalError> {
        while let Some((kind, payload)) = self.read_frame()? {
            if let Some(record) = Record::decode(kind, &payload)? {
                return Ok(Some(record));
            }
        }
        Ok(None)
    }

    /// Reads the next event record, skipping state entries.
    pub fn read_event(&mut self) -> Result<Option<EventRecord>, JournalError> {
        while let Some(record) = self.read_record()? {
            if let Record::Event(event) = record {
                return Ok(Some(event));
            }
        }
        Ok(None)
    }

    /// Reads the next state entry, skipping events.
    pub fn read_state(&mut self) -> Result<Option<StateEntry>, JournalError> {
        while let Some(record) = self.read_record()? {
            if let Record::State(entry) = record {
                return Ok(Some(entry));
            }
        }
        Ok(None)
    }
}
