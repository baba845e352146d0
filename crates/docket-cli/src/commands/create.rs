//! Create command implementation.

use crate::backend::{LedgerPaths, Settings};
use crate::CallerArgs;
use docket_core::{Operation, Stub};
use std::io::Read;

pub fn run(
    settings: &Settings,
    ledger: String,
    puuid: String,
    input: Option<String>,
    caller: CallerArgs,
    sync: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let payload = match input {
        Some(path) => {
            std::fs::read(&path).map_err(|e| format!("Failed to read {}: {}", path, e))?
        }
        None => {
            let mut buffer = Vec::new();
            std::io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
    };
    // Stored byte for byte; operation arguments are strings.
    let payload =
        String::from_utf8(payload).map_err(|_| "Docket payload must be valid UTF-8")?;

    let dispatcher = settings.dispatcher()?;
    let paths = LedgerPaths::resolve(&ledger, true)?;
    let (mut state, mut events) = paths.open(sync)?;
    let credentials = caller.credentials();
    let mut stub = Stub::new(&mut state, &mut events, &credentials);

    dispatcher.invoke(
        &mut stub,
        Operation::CreateDocket.as_str(),
        &[puuid.as_str(), payload.as_str()],
    )?;
    println!("Created {}", puuid);
    Ok(())
}
