//! Invoke command implementation.

use crate::backend::{LedgerPaths, Settings};
use crate::output;
use crate::CallerArgs;
use docket_core::Stub;

pub fn run(
    settings: &Settings,
    ledger: String,
    function: String,
    args: Vec<String>,
    query: bool,
    caller: CallerArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let dispatcher = settings.dispatcher()?;
    let paths = LedgerPaths::resolve(&ledger, !query)?;
    let credentials = caller.credentials();

    let result = if query {
        let (mut state, mut events) = paths.open_read_only()?;
        let mut stub = Stub::new(&mut state, &mut events, &credentials);
        dispatcher.query(&mut stub, &function, args.as_slice())?
    } else {
        let (mut state, mut events) = paths.open(false)?;
        let mut stub = Stub::new(&mut state, &mut events, &credentials);
        dispatcher.invoke(&mut stub, &function, args.as_slice())?
    };
    if !result.is_empty() {
        println!("{}", output::format_payload(&result, false));
    }
    Ok(())
}
