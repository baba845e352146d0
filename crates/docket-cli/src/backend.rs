//! Ledger directory layout and service wiring shared by the commands.

use crate::CallerArgs;
use docket_core::{Dispatcher, DocketService, ServiceConfig, StaticCredentials};
use docket_store::{
    JournalEventSink, JournalLedger, MemoryEventSink, ReadMode, WriteOptions,
};
use std::path::{Path, PathBuf};
use tracing::Dispatch;

/// State journal file name inside a ledger directory.
pub const STATE_FILE: &str = "state.dkj";
/// Event journal file name inside a ledger directory.
pub const EVENTS_FILE: &str = "events.dkj";

/// Global options.
pub struct Settings {
    pub config: Option<String>,
    pub verbose: bool,
}

impl Settings {
    /// Builds the dispatcher, logging to stderr.
    pub fn dispatcher(&self) -> Result<Dispatcher, Box<dyn std::error::Error>> {
        let config = match &self.config {
            Some(path) => ServiceConfig::load(path)
                .map_err(|e| format!("Failed to load config {}: {}", path, e))?,
            None => ServiceConfig::default(),
        };
        let level = if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };
        let subscriber = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(level)
            .finish();
        Ok(Dispatcher::new(DocketService::new(
            config,
            Dispatch::new(subscriber),
        )))
    }
}

/// Paths of the two journals that make up a ledger.
pub struct LedgerPaths {
    pub state: PathBuf,
    pub events: PathBuf,
}

impl LedgerPaths {
    /// Resolves a ledger directory, creating it when `create` is set.
    pub fn resolve(dir: &str, create: bool) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(dir);
        if dir.as_os_str().is_empty() {
            return Err("Ledger directory must not be empty".into());
        }
        if create {
            std::fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create ledger {}: {}", dir.display(), e))?;
        } else if !dir.is_dir() {
            return Err(format!("Ledger directory not found: {}", dir.display()).into());
        }
        Ok(Self {
            state: dir.join(STATE_FILE),
            events: dir.join(EVENTS_FILE),
        })
    }

    /// Opens both journals for writing, cutting off a torn state tail.
    pub fn open(
        &self,
        sync: bool,
    ) -> Result<(JournalLedger, JournalEventSink), Box<dyn std::error::Error>> {
        let options = WriteOptions {
            sync,
            ..WriteOptions::default()
        };
        let ledger = JournalLedger::open(&self.state, options.clone(), ReadMode::Permissive)
            .map_err(|e| format!("Failed to open state journal: {}", e))?;
        let events = JournalEventSink::open(&self.events, options)
            .map_err(|e| format!("Failed to open event journal: {}", e))?;
        Ok((ledger, events))
    }

    /// Replays the state journal without creating or modifying any file.
    ///
    /// The paired sink keeps events in memory; reads never emit.
    pub fn open_read_only(
        &self,
    ) -> Result<(JournalLedger, MemoryEventSink), Box<dyn std::error::Error>> {
        let ledger = JournalLedger::open_read_only(&self.state, ReadMode::Permissive)
            .map_err(|e| format!("Failed to open state journal: {}", e))?;
        Ok((ledger, MemoryEventSink::new()))
    }
}

impl CallerArgs {
    /// Credential source carrying only the attributes given on the command line.
    pub fn credentials(&self) -> StaticCredentials {
        let mut credentials = StaticCredentials::new();
        if let Some(username) = &self.username {
            credentials = credentials.with_attribute("username", username.as_str());
        }
        if let Some(role) = &self.role {
            credentials = credentials.with_attribute("role", role.as_str());
        }
        credentials
    }
}
