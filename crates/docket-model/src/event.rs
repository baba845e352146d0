use serde::{Deserialize, Serialize};

/// Event name under which Docket notifications are emitted.
pub const DEFAULT_EVENT_NAME: &str = "evtSender";

/// Logical type of a Docket event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventType {
    /// A Docket was written by `CreateDocket`.
    DocketCreation,
    /// A Docket's status was changed by `UpdateDocket`.
    DocketUpdate,
}

impl EventType {
    /// Returns the wire name of the event type.
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::DocketCreation => "docketCreation",
            EventType::DocketUpdate => "docketUpdate",
        }
    }
}

/// Structured payload emitted after a successful ledger write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocketEvent {
    /// Event type.
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Human-readable notice naming the identifier.
    pub description: String,
}

impl DocketEvent {
    /// Creation notice for `puuid`.
    pub fn created(puuid: &str) -> Self {
        Self {
            event_type: EventType::DocketCreation,
            description: format!("{} Successfully created", puuid),
        }
    }

    /// Status update notice for `puuid`.
    pub fn updated(puuid: &str) -> Self {
        Self {
            event_type: EventType::DocketUpdate,
            description: format!("{} Successfully updated status", puuid),
        }
    }

    /// Encodes the payload as JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
