//! Append-only journal format for Docket ledger entries and events.
//!
//! This crate provides:
//! - Framed, append-only storage of ledger state entries and emitted events
//! - Reader/writer APIs with strict and permissive modes
//! - Digest verification for stored values
//!
//! ## Quick Start
//!
//! ```rust
//! use docket_journal::{JournalReader, JournalWriter, ReadMode, Record, StateEntry, WriteOptions};
//!
//! let dir = tempfile::tempdir()?;
//! let path = dir.path().join("state.dkj");
//!
//! let mut writer = JournalWriter::open(&path, WriteOptions::default())?;
//! writer.append_state(&StateEntry::new("item-001", b"{}".to_vec()))?;
//! writer.finish()?;
//!
//! let mut reader = JournalReader::open(&path, ReadMode::Strict)?;
//! while let Some(record) = reader.read_record()? {
//!     if let Record::State(entry) = record {
//!         println!("{} -> {} bytes", entry.key, entry.value.len());
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Format
//!
//! A 16-byte header (`DKJ1`, version, flags, reserved) is followed by record
//! frames. Each frame is an 8-byte header (kind, reserved, little-endian
//! length) and a JSON payload. Unknown frame kinds are skipped on read.

#![deny(missing_docs)]

/// Error types for journal operations.
pub mod errors;
/// Frame structure and serialization.
pub mod frame;
/// Journal reader implementation.
pub mod reader;
/// Record payloads carried by frames.
pub mod record;
/// Verification helpers for stored values.
pub mod verification;
/// Journal writer implementation.
pub mod writer;

pub use errors::{FrameFault, HeaderFault, JournalError};
pub use frame::{FrameHeader, FrameKind, JournalHeader};
pub use reader::{JournalReader, ReadMode};
pub use record::{EventRecord, Record, StateEntry};
pub use verification::{verify_state_entry, EntryVerdict};
pub use writer::{JournalWriter, WriteOptions};
