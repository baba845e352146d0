//! Events command implementation.

use crate::backend::LedgerPaths;
use crate::output;
use docket_store::{
    AndFilter, EventFilter, EventNameFilter, EventReader, EventTypeFilter, FilteredEvents,
    JournalEventReader, ReadMode,
};

pub fn run(
    ledger: String,
    json: bool,
    name: Option<String>,
    event_type: Option<String>,
    max_events: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let paths = LedgerPaths::resolve(&ledger, false)?;
    if !paths.events.exists() {
        return Err(format!("No event journal in {}", ledger).into());
    }
    let reader = JournalEventReader::open(&paths.events, ReadMode::Strict)
        .map_err(|e| format!("Failed to open event journal: {}", e))?;

    let mut filters: Vec<Box<dyn EventFilter>> = Vec::new();
    if let Some(name) = name {
        filters.push(Box::new(EventNameFilter { name }));
    }
    if let Some(event_type) = event_type {
        filters.push(Box::new(EventTypeFilter { event_type }));
    }
    let mut events = FilteredEvents::new(reader, AndFilter { filters });

    if !json {
        output::print_event_header();
    }

    let mut event_count: u64 = 0;
    while let Some(event) = events.read_next()? {
        if let Some(max) = max_events {
            if event_count >= max {
                break;
            }
        }

        if json {
            println!("{}", output::format_event_json(&event));
        } else {
            println!("{}", output::format_event_row(&event));
        }
        event_count += 1;
    }

    Ok(())
}
