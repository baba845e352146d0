//! Event filtering API for selective event iteration.

use crate::error::StoreError;
use crate::traits::EventReader;
use docket_journal::EventRecord;

/// Trait for filtering events during iteration.
pub trait EventFilter {
    /// Returns true if the event matches the filter criteria.
    fn matches(&self, event: &EventRecord) -> bool;
}

/// Filter by event name (e.g. `evtSender`).
#[derive(Debug, Clone)]
pub struct EventNameFilter {
    /// Event name to match.
    pub name: String,
}

impl EventFilter for EventNameFilter {
    fn matches(&self, event: &EventRecord) -> bool {
        event.name == self.name
    }
}

/// Filter by the `type` field of a JSON payload (e.g. `docketCreation`).
///
/// Payloads that are not JSON objects never match.
#[derive(Debug, Clone)]
pub struct EventTypeFilter {
    /// Event type to match.
    pub event_type: String,
}

impl EventFilter for EventTypeFilter {
    fn matches(&self, event: &EventRecord) -> bool {
        event
            .payload_json()
            .as_ref()
            .and_then(|v| v.get("type"))
            .and_then(|v| v.as_str())
            .map(|s| s == self.event_type)
            .unwrap_or(false)
    }
}

/// Composite filter: all filters must match (AND).
pub struct AndFilter {
    /// Filters to combine with AND logic.
    pub filters: Vec<Box<dyn EventFilter>>,
}

impl EventFilter for AndFilter {
    fn matches(&self, event: &EventRecord) -> bool {
        self.filters.iter().all(|f| f.matches(event))
    }
}

/// Reader that filters events from an underlying reader.
pub struct FilteredEvents<R: EventReader, F: EventFilter> {
    reader: R,
    filter: F,
}

impl<R: EventReader, F: EventFilter> FilteredEvents<R, F> {
    /// Creates a new filtered reader.
    pub fn new(reader: R, filter: F) -> Self {
        Self { reader, filter }
    }
}

impl<R: EventReader, F: EventFilter> EventReader for FilteredEvents<R, F> {
    fn read_next(&mut self) -> Result<Option<EventRecord>, StoreError> {
        loop {
            match self.reader.read_next()? {
                None => return Ok(None),
                Some(event) if self.filter.matches(&event) => return Ok(Some(event)),
                Some(_) => continue,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(name: &str, payload: &str) -> EventRecord {
        EventRecord::new(name, payload.as_bytes().to_vec())
    }

    #[test]
    fn type_filter_reads_json_payload() {
        let filter = EventTypeFilter {
            event_type: "docketCreation".to_string(),
        };
        assert!(filter.matches(&event("evtSender", r#"{"type":"docketCreation"}"#)));
        assert!(!filter.matches(&event("evtSender", r#"{"type":"docketUpdate"}"#)));
        assert!(!filter.matches(&event("evtSender", "docketCreation")));
    }

    #[test]
    fn and_filter_requires_all() {
        let filter = AndFilter {
            filters: vec![
                Box::new(EventNameFilter {
                    name: "evtSender".to_string(),
                }),
                Box::new(EventTypeFilter {
                    event_type: "docketUpdate".to_string(),
                }),
            ],
        };
        assert!(filter.matches(&event("evtSender", r#"{"type":"docketUpdate"}"#)));
        assert!(!filter.matches(&event("other", r#"{"type":"docketUpdate"}"#)));
    }
}
