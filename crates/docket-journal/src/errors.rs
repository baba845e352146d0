use thiserror::Error;

/// Ways a 16-byte journal file header can be malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderFault {
    /// Magic bytes are not `DKJ1`.
    #[error("magic {0:?} is not a docket journal")]
    Magic([u8; 4]),
    /// Format version is not one this crate reads.
    #[error("unsupported version 0x{0:04x}")]
    Version(u16),
    /// Flags field is non-zero.
    #[error("non-zero flags 0x{0:04x}")]
    Flags(u16),
    /// Reserved bytes are non-zero.
    #[error("non-zero reserved bytes")]
    Reserved,
}

/// Ways an 8-byte frame header can be malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameFault {
    /// Reserved bytes after the kind byte are non-zero.
    #[error("non-zero reserved bytes")]
    Reserved,
    /// Declared payload length exceeds the frame limit.
    #[error("declared length {0} exceeds the frame limit")]
    Oversized(u32),
}

/// Errors raised while reading or writing a journal.
#[derive(Error, Debug)]
pub enum JournalError {
    /// Underlying file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The file header is malformed.
    #[error("bad journal header: {0}")]
    BadHeader(#[from] HeaderFault),
    /// A frame header is malformed.
    #[error("bad frame at offset {offset}: {fault}")]
    BadFrame {
        /// Offset of the frame header.
        offset: u64,
        /// What is wrong with it.
        fault: FrameFault,
    },
    /// A payload handed to the writer is over the frame limit.
    #[error("payload of {size} bytes exceeds the {max} byte frame limit")]
    PayloadTooLarge {
        /// Payload size.
        size: u64,
        /// Frame limit.
        max: u32,
    },
    /// A frame payload does not decode as its record kind.
    #[error("record payload is not valid JSON: {0}")]
    Payload(#[from] serde_json::Error),
    /// A non-empty file is too short to hold a journal header.
    #[error("file of {len} bytes is too short to be a journal")]
    NotAJournal {
        /// File length.
        len: u64,
    },
    /// The file ends partway through a frame (strict mode only).
    #[error("torn frame at offset {offset}")]
    TornFrame {
        /// Offset of the incomplete frame.
        offset: u64,
    },
}
