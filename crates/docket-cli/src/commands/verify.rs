//! Verify command implementation.

use crate::backend::LedgerPaths;
use docket_journal::{verify_state_entry, EntryVerdict, JournalReader, ReadMode};
use serde_json::json;

pub fn run(ledger: String, strict: bool, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let paths = LedgerPaths::resolve(&ledger, false)?;
    let mut reader = JournalReader::open(&paths.state, ReadMode::Strict)
        .map_err(|e| format!("Failed to open state journal: {}", e))?;

    let mut all_ok = true;
    let mut results = Vec::new();
    while let Some(entry) = reader.read_state()? {
        let verdict = verify_state_entry(&entry);
        all_ok = all_ok && verdict.is_ok();
        results.push((entry.key, verdict));
    }

    if json_output {
        let output: Vec<_> = results
            .iter()
            .map(|(key, verdict)| match verdict {
                EntryVerdict::Ok => json!({ "key": key, "verdict": "Ok" }),
                EntryVerdict::Mismatch { recorded, computed } => json!({
                    "key": key,
                    "verdict": "Mismatch",
                    "recorded": recorded.b64,
                    "computed": computed.b64,
                }),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{:<40} {}", "KEY", "VERDICT");
        println!("{}", "-".repeat(52));
        for (key, verdict) in &results {
            let label = if verdict.is_ok() { "Ok" } else { "Mismatch" };
            println!("{:<40} {}", key, label);
        }
        println!("{} entries checked", results.len());
    }

    if strict && !all_ok {
        return Err("Verification failed: one or more entries do not match their digest".into());
    }

    Ok(())
}
