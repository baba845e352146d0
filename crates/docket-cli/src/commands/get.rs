//! Get command implementation.

use crate::backend::{LedgerPaths, Settings};
use crate::output;
use docket_core::{Operation, StaticCredentials, Stub};

pub fn run(
    settings: &Settings,
    ledger: String,
    puuid: String,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dispatcher = settings.dispatcher()?;
    let paths = LedgerPaths::resolve(&ledger, false)?;
    let (mut state, mut events) = paths.open_read_only()?;
    // Reads are not role-gated.
    let anonymous = StaticCredentials::new();
    let mut stub = Stub::new(&mut state, &mut events, &anonymous);

    let value = dispatcher.query(&mut stub, Operation::GetDocket.as_str(), &[puuid.as_str()])?;
    if value.is_empty() {
        return Err(format!("Docket not found: {}", puuid).into());
    }
    println!("{}", output::format_payload(&value, pretty));
    Ok(())
}
