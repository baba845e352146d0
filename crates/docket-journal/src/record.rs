use crate::errors::JournalError;
use crate::frame::FrameKind;
use docket_model::ValueDigest;
use serde::{Deserialize, Serialize};

/// A key/value write recorded in the journal.
///
/// Values are opaque bytes and are stored base64-encoded alongside a digest
/// computed at write time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateEntry {
    /// Ledger key.
    pub key: String,
    /// Stored value bytes.
    #[serde(with = "base64_bytes")]
    pub value: Vec<u8>,
    /// Digest of `value` at write time.
    pub digest: ValueDigest,
}

impl StateEntry {
    /// Creates an entry for `key`, computing the value digest.
    pub fn new(key: impl Into<String>, value: Vec<u8>) -> Self {
        let digest = ValueDigest::of(&value);
        Self {
            key: key.into(),
            value,
            digest,
        }
    }
}

/// A named event recorded in the journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Event name (e.g. `evtSender`).
    pub name: String,
    /// Event payload bytes.
    #[serde(with = "base64_bytes")]
    pub payload: Vec<u8>,
}

impl EventRecord {
    /// Creates an event record.
    pub fn new(name: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }

    /// Parses the payload as JSON, if it is JSON.
    pub fn payload_json(&self) -> Option<serde_json::Value> {
        serde_json::from_slice(&self.payload).ok()
    }
}

/// A decoded journal record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// Ledger state entry.
    State(StateEntry),
    /// Emitted event.
    Event(EventRecord),
}

impl Record {
    /// Decodes a frame payload. Unknown kinds decode to `None`.
    pub fn decode(kind: FrameKind, payload: &[u8]) -> Result<Option<Self>, JournalError> {
        let record = match kind {
            FrameKind::StateEntry => Record::State(serde_json::from_slice(payload)?),
            FrameKind::Event => Record::Event(serde_json::from_slice(payload)?),
            FrameKind::Unknown(_) => return Ok(None),
        };
        Ok(Some(record))
    }
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        STANDARD.decode(s).map_err(serde::de::Error::custom)
    }
}
