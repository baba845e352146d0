//! On-disk layout: the file header and the per-record frame header.

use crate::errors::{FrameFault, HeaderFault, JournalError};

/// Journal file magic bytes.
pub const MAGIC: [u8; 4] = *b"DKJ1";

/// Journal format version written and accepted.
pub const VERSION: u16 = 0x0001;

/// File header size in bytes.
pub const HEADER_SIZE: usize = 16;

/// Frame header size in bytes.
pub const FRAME_HEADER_SIZE: usize = 8;

/// Largest payload a single frame may carry (16 MiB).
pub const MAX_PAYLOAD_SIZE: u32 = 16 * 1024 * 1024;

/// File header: magic, little-endian version, zero flags, zero padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalHeader {
    /// Format version.
    pub version: u16,
}

impl Default for JournalHeader {
    fn default() -> Self {
        Self { version: VERSION }
    }
}

impl JournalHeader {
    /// Encodes the header.
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[..4].copy_from_slice(&MAGIC);
        out[4..6].copy_from_slice(&self.version.to_le_bytes());
        out
    }

    /// Decodes and checks a header.
    pub fn decode(raw: &[u8; HEADER_SIZE]) -> Result<Self, HeaderFault> {
        let magic = [raw[0], raw[1], raw[2], raw[3]];
        if magic != MAGIC {
            return Err(HeaderFault::Magic(magic));
        }
        let version = u16::from_le_bytes([raw[4], raw[5]]);
        if version != VERSION {
            return Err(HeaderFault::Version(version));
        }
        let flags = u16::from_le_bytes([raw[6], raw[7]]);
        if flags != 0 {
            return Err(HeaderFault::Flags(flags));
        }
        if raw[8..].iter().any(|b| *b != 0) {
            return Err(HeaderFault::Reserved);
        }
        Ok(Self { version })
    }
}

/// What a frame's payload holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// A key/value write against the ledger.
    StateEntry,
    /// A named event emitted after a write.
    Event,
    /// A kind this version does not interpret; readers skip it.
    Unknown(u8),
}

impl From<u8> for FrameKind {
    fn from(byte: u8) -> Self {
        match byte {
            0x01 => FrameKind::StateEntry,
            0x02 => FrameKind::Event,
            other => FrameKind::Unknown(other),
        }
    }
}

impl From<FrameKind> for u8 {
    fn from(kind: FrameKind) -> Self {
        match kind {
            FrameKind::StateEntry => 0x01,
            FrameKind::Event => 0x02,
            FrameKind::Unknown(byte) => byte,
        }
    }
}

/// Frame header: kind byte, three zero bytes, little-endian payload length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Payload kind.
    pub kind: FrameKind,
    /// Payload length in bytes.
    pub len: u32,
}

impl FrameHeader {
    /// Header for `payload`, refusing payloads over [`MAX_PAYLOAD_SIZE`].
    pub fn for_payload(kind: FrameKind, payload: &[u8]) -> Result<Self, JournalError> {
        match u32::try_from(payload.len()) {
            Ok(len) if len <= MAX_PAYLOAD_SIZE => Ok(Self { kind, len }),
            _ => Err(JournalError::PayloadTooLarge {
                size: payload.len() as u64,
                max: MAX_PAYLOAD_SIZE,
            }),
        }
    }

    /// Encodes the header.
    pub fn encode(&self) -> [u8; FRAME_HEADER_SIZE] {
        let mut out = [0u8; FRAME_HEADER_SIZE];
        out[0] = self.kind.into();
        out[4..].copy_from_slice(&self.len.to_le_bytes());
        out
    }

    /// Decodes and checks a header.
    pub fn decode(raw: &[u8; FRAME_HEADER_SIZE]) -> Result<Self, FrameFault> {
        if raw[1..4] != [0, 0, 0] {
            return Err(FrameFault::Reserved);
        }
        let len = u32::from_le_bytes([raw[4], raw[5], raw[6], raw[7]]);
        if len > MAX_PAYLOAD_SIZE {
            return Err(FrameFault::Oversized(len));
        }
        Ok(Self {
            kind: FrameKind::from(raw[0]),
            len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_layout_is_fixed() {
        let raw = JournalHeader::default().encode();
        assert_eq!(&raw[..4], b"DKJ1");
        assert_eq!(&raw[4..6], &[0x01, 0x00]);
        assert!(raw[6..].iter().all(|b| *b == 0));
        assert_eq!(JournalHeader::decode(&raw).unwrap().version, VERSION);
    }

    #[test]
    fn header_faults_are_specific() {
        let good = JournalHeader::default().encode();

        let mut raw = good;
        raw[..4].copy_from_slice(b"NRJ1");
        assert_eq!(JournalHeader::decode(&raw), Err(HeaderFault::Magic(*b"NRJ1")));

        let mut raw = good;
        raw[4] = 0x02;
        assert_eq!(JournalHeader::decode(&raw), Err(HeaderFault::Version(2)));

        let mut raw = good;
        raw[6] = 0x01;
        assert_eq!(JournalHeader::decode(&raw), Err(HeaderFault::Flags(1)));

        let mut raw = good;
        raw[15] = 0xFF;
        assert_eq!(JournalHeader::decode(&raw), Err(HeaderFault::Reserved));
    }

    #[test]
    fn frame_header_encodes_kind_and_length() {
        let header = FrameHeader::for_payload(FrameKind::Event, &[0u8; 300]).unwrap();
        let raw = header.encode();
        assert_eq!(raw, [0x02, 0, 0, 0, 0x2C, 0x01, 0, 0]);
        assert_eq!(FrameHeader::decode(&raw), Ok(header));
    }

    #[test]
    fn frame_header_rejects_reserved_and_oversized() {
        let mut raw = [0x01, 0, 0, 0, 0, 0, 0, 0];
        raw[2] = 0x01;
        assert_eq!(FrameHeader::decode(&raw), Err(FrameFault::Reserved));

        let mut raw = [0x01, 0, 0, 0, 0, 0, 0, 0];
        raw[4..].copy_from_slice(&(MAX_PAYLOAD_SIZE + 1).to_le_bytes());
        assert_eq!(
            FrameHeader::decode(&raw),
            Err(FrameFault::Oversized(MAX_PAYLOAD_SIZE + 1))
        );
    }

    #[test]
    fn unknown_kinds_keep_their_byte() {
        assert_eq!(u8::from(FrameKind::from(0xFF)), 0xFF);
        assert_eq!(FrameKind::from(0x01), FrameKind::StateEntry);
    }
}
