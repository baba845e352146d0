use docket_store::{
    EventReader, EventSink, EventTypeFilter, FilteredEvents, JournalEventReader,
    JournalEventSink, JournalLedger, Ledger, ReadMode, StoreError, WriteOptions,
};
use std::fs::{self, OpenOptions};
use std::io::Write;
use tempfile::TempDir;

#[test]
fn test_journal_ledger_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("state.dkj");

    {
        let mut ledger =
            JournalLedger::open(&path, WriteOptions::default(), ReadMode::Strict).unwrap();
        ledger.put("item-001", b"first").unwrap();
        ledger.put("item-002", b"other").unwrap();
        ledger.put("item-001", b"second").unwrap();
        assert_eq!(ledger.get("item-001").unwrap().unwrap(), b"second");
    }

    let ledger = JournalLedger::open(&path, WriteOptions::default(), ReadMode::Strict).unwrap();
    assert_eq!(ledger.get("item-001").unwrap().unwrap(), b"second");
    assert_eq!(ledger.get("item-002").unwrap().unwrap(), b"other");
    assert_eq!(ledger.get("item-003").unwrap(), None);
}

#[test]
fn test_journal_ledger_without_append_starts_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("state.dkj");

    {
        let mut ledger =
            JournalLedger::open(&path, WriteOptions::default(), ReadMode::Strict).unwrap();
        ledger.put("item-001", b"first").unwrap();
    }

    let options = WriteOptions {
        append: false,
        ..WriteOptions::default()
    };
    let ledger = JournalLedger::open(&path, options, ReadMode::Strict).unwrap();
    assert_eq!(ledger.get("item-001").unwrap(), None);
}

#[test]
fn test_truncated_state_journal_strict_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("state.dkj");

    {
        let mut ledger =
            JournalLedger::open(&path, WriteOptions::default(), ReadMode::Strict).unwrap();
        ledger.put("item-001", b"first").unwrap();
        ledger.put("item-002", b"second").unwrap();
    }
    let len = fs::metadata(&path).unwrap().len();
    OpenOptions::new()
        .write(true)
        .open(&path)
        .unwrap()
        .set_len(len - 2)
        .unwrap();

    let result = JournalLedger::open(&path, WriteOptions::default(), ReadMode::Strict);
    assert!(matches!(result, Err(StoreError::Journal(_))));
}

#[test]
fn test_truncated_state_journal_permissive_recovers() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("state.dkj");

    {
        let mut ledger =
            JournalLedger::open(&path, WriteOptions::default(), ReadMode::Strict).unwrap();
        ledger.put("item-001", b"first").unwrap();
        ledger.put("item-002", b"second").unwrap();
    }
    let len = fs::metadata(&path).unwrap().len();
    OpenOptions::new()
        .write(true)
        .open(&path)
        .unwrap()
        .set_len(len - 2)
        .unwrap();

    {
        let mut ledger =
            JournalLedger::open(&path, WriteOptions::default(), ReadMode::Permissive).unwrap();
        assert_eq!(ledger.get("item-001").unwrap().unwrap(), b"first");
        assert_eq!(ledger.get("item-002").unwrap(), None);
        ledger.put("item-003", b"third").unwrap();
    }

    // The torn tail was cut, so the journal reads cleanly in strict mode again.
    let ledger = JournalLedger::open(&path, WriteOptions::default(), ReadMode::Strict).unwrap();
    assert_eq!(ledger.get("item-003").unwrap().unwrap(), b"third");
}

#[test]
fn test_read_only_ledger_of_missing_file_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("state.dkj");

    let mut ledger = JournalLedger::open_read_only(&path, ReadMode::Permissive).unwrap();
    assert_eq!(ledger.get("item-001").unwrap(), None);
    assert!(matches!(
        ledger.put("item-001", b"first"),
        Err(StoreError::ReadOnly)
    ));
    assert!(!path.exists());
}

#[test]
fn test_read_only_ledger_leaves_torn_tail_in_place() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("state.dkj");

    {
        let mut ledger =
            JournalLedger::open(&path, WriteOptions::default(), ReadMode::Strict).unwrap();
        ledger.put("item-001", b"first").unwrap();
    }
    let mut file = OpenOptions::new().append(true).open(&path).unwrap();
    file.write_all(&[0x01, 0x00, 0x00, 0x00, 0x32, 0x00]).unwrap();
    let torn_len = fs::metadata(&path).unwrap().len();

    let ledger = JournalLedger::open_read_only(&path, ReadMode::Permissive).unwrap();
    assert_eq!(ledger.get("item-001").unwrap().unwrap(), b"first");
    assert_eq!(fs::metadata(&path).unwrap().len(), torn_len);

    assert!(matches!(
        JournalLedger::open_read_only(&path, ReadMode::Strict),
        Err(StoreError::Journal(_))
    ));
}

#[test]
fn test_event_journal_filtering() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("events.dkj");

    {
        let mut sink = JournalEventSink::open(&path, WriteOptions::default()).unwrap();
        sink.emit("evtSender", br#"{"type":"docketCreation","description":"a"}"#)
            .unwrap();
        sink.emit("evtSender", br#"{"type":"docketUpdate","description":"b"}"#)
            .unwrap();
        sink.emit("evtSender", br#"{"type":"docketCreation","description":"c"}"#)
            .unwrap();
    }

    let reader = JournalEventReader::open(&path, ReadMode::Strict).unwrap();
    let filter = EventTypeFilter {
        event_type: "docketCreation".to_string(),
    };
    let mut filtered = FilteredEvents::new(reader, filter);

    let mut descriptions = Vec::new();
    while let Some(event) = filtered.read_next().unwrap() {
        descriptions.push(event.payload_json().unwrap()["description"].clone());
    }
    assert_eq!(descriptions, vec!["a", "c"]);
}
