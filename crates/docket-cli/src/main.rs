//! Docket CLI - drive the Docket service against a local journal-backed ledger.

use clap::{Parser, Subcommand};

mod backend;
mod commands;
mod output;

use commands::{create, events, get, invoke, update, verify};

#[derive(Parser)]
#[command(name = "docket")]
#[command(about = "Docket ledger record management CLI")]
struct Cli {
    /// Service configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<String>,
    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Caller credential attributes.
#[derive(clap::Args, Clone, Default)]
pub struct CallerArgs {
    /// Caller username attribute
    #[arg(long)]
    username: Option<String>,
    /// Caller role attribute
    #[arg(long)]
    role: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the raw Docket stored under an identifier
    Get {
        /// Ledger directory
        ledger: String,
        /// Item identifier (puuid)
        puuid: String,
        /// Pretty-print JSON payloads
        #[arg(long)]
        pretty: bool,
    },
    /// Store a Docket under an identifier
    Create {
        /// Ledger directory
        ledger: String,
        /// Item identifier (puuid)
        puuid: String,
        /// Docket payload file (or stdin if not provided)
        input: Option<String>,
        #[command(flatten)]
        caller: CallerArgs,
        /// Sync journals to disk after each write
        #[arg(long)]
        sync: bool,
    },
    /// Change the status of a stored Docket
    Update {
        /// Ledger directory
        ledger: String,
        /// Item identifier (puuid)
        puuid: String,
        /// New status value
        status: String,
        #[command(flatten)]
        caller: CallerArgs,
        /// Sync journals to disk after each write
        #[arg(long)]
        sync: bool,
    },
    /// Run a named operation with positional arguments
    Invoke {
        /// Ledger directory
        ledger: String,
        /// Operation name (e.g. GetDocket, CreateDocket, UpdateDocket)
        function: String,
        /// Positional arguments
        args: Vec<String>,
        /// Use the read-only query entry point
        #[arg(long)]
        query: bool,
        #[command(flatten)]
        caller: CallerArgs,
    },
    /// List emitted events
    Events {
        /// Ledger directory
        ledger: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Only events emitted under this name
        #[arg(long)]
        name: Option<String>,
        /// Only events whose payload type matches
        #[arg(long)]
        event_type: Option<String>,
        /// Stop after N events (default: unlimited)
        #[arg(long)]
        max_events: Option<u64>,
    },
    /// Verify stored value digests in the state journal
    Verify {
        /// Ledger directory
        ledger: String,
        /// Exit with error code if any entry fails verification
        #[arg(long)]
        strict: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let settings = backend::Settings {
        config: cli.config,
        verbose: cli.verbose,
    };

    let result = match cli.command {
        Commands::Get {
            ledger,
            puuid,
            pretty,
        } => get::run(&settings, ledger, puuid, pretty),
        Commands::Create {
            ledger,
            puuid,
            input,
            caller,
            sync,
        } => create::run(&settings, ledger, puuid, input, caller, sync),
        Commands::Update {
            ledger,
            puuid,
            status,
            caller,
            sync,
        } => update::run(&settings, ledger, puuid, status, caller, sync),
        Commands::Invoke {
            ledger,
            function,
            args,
            query,
            caller,
        } => invoke::run(&settings, ledger, function, args, query, caller),
        Commands::Events {
            ledger,
            json,
            name,
            event_type,
            max_events,
        } => events::run(ledger, json, name, event_type, max_events),
        Commands::Verify {
            ledger,
            strict,
            json,
        } => verify::run(ledger, strict, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
