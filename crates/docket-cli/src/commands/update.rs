//! Update command implementation.

use crate::backend::{LedgerPaths, Settings};
use crate::CallerArgs;
use docket_core::{Operation, Stub};

pub fn run(
    settings: &Settings,
    ledger: String,
    puuid: String,
    status: String,
    caller: CallerArgs,
    sync: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dispatcher = settings.dispatcher()?;
    let paths = LedgerPaths::resolve(&ledger, false)?;
    let (mut state, mut events) = paths.open(sync)?;
    let credentials = caller.credentials();
    let mut stub = Stub::new(&mut state, &mut events, &credentials);

    dispatcher.invoke(
        &mut stub,
        Operation::UpdateDocket.as_str(),
        &[puuid.as_str(), status.as_str()],
    )?;
    println!("Updated {} to {}", puuid, status);
    Ok(())
}
