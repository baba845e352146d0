#![allow(dead_code)]

use docket_core::{
    CredentialError, CredentialSource, Dispatcher, DocketService, ServiceConfig, StaticCredentials,
};
use docket_store::{EventSink, Ledger, StoreError};
use std::io;
use std::sync::{Arc, Mutex};
use tracing::Dispatch;

pub const ADMIN: &str = "Bank_Home_Loan_Admin";

pub const DOCKET_JSON: &str = concat!(
    r#"{"itempid":{"itemtype":"property","pidname":"Deed 17","puuid":"item-001","pidstatus":"pending"},"#,
    r#""itemsids":{"sidname":"","sid":"","siddateincluded":"","sidvalidfrom":"","sidvalidtill":"","#,
    r#""sidvalidationtype":"","sidauthorisedby":""},"#,
    r#""docketaccess":{"daidaccessed":"","dareceiver":"","dadateapplied":"","dadateauthorised":"","#,
    r#""davalidfrom":"","davalidtill":""}}"#
);

pub fn credentials(username: &str, role: &str) -> StaticCredentials {
    StaticCredentials::new()
        .with_attribute("username", username)
        .with_attribute("role", role)
}

pub fn admin() -> StaticCredentials {
    credentials("alice", ADMIN)
}

/// Shared in-memory buffer a `fmt` subscriber writes into.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn dispatch(&self) -> Dispatch {
        let logs = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || logs.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        Dispatch::new(subscriber)
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn service_with(config: ServiceConfig) -> (DocketService, CapturedLogs) {
    let logs = CapturedLogs::default();
    (DocketService::new(config, logs.dispatch()), logs)
}

pub fn service() -> (DocketService, CapturedLogs) {
    service_with(ServiceConfig::default())
}

pub fn dispatcher() -> (Dispatcher, CapturedLogs) {
    let (service, logs) = service();
    (Dispatcher::new(service), logs)
}

/// Ledger whose reads or writes fail.
#[derive(Default)]
pub struct FailingLedger {
    pub fail_get: bool,
    pub fail_put: bool,
    pub puts: usize,
}

impl Ledger for FailingLedger {
    fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        if self.fail_get {
            return Err(StoreError::Unavailable("peer unreachable".to_string()));
        }
        Ok(None)
    }

    fn put(&mut self, _key: &str, _value: &[u8]) -> Result<(), StoreError> {
        self.puts += 1;
        if self.fail_put {
            return Err(StoreError::Unavailable("write rejected".to_string()));
        }
        Ok(())
    }
}

/// Event sink that always fails.
#[derive(Default)]
pub struct FailingSink {
    pub attempts: usize,
}

impl EventSink for FailingSink {
    fn emit(&mut self, _name: &str, _payload: &[u8]) -> Result<(), StoreError> {
        self.attempts += 1;
        Err(StoreError::Unavailable("event hub down".to_string()))
    }
}

/// Credential whose attributes cannot be verified.
pub struct UnverifiableCredentials;

impl CredentialSource for UnverifiableCredentials {
    fn read_attribute(&self, name: &str) -> Result<String, CredentialError> {
        Err(CredentialError::Unverifiable {
            name: name.to_string(),
            reason: "certificate expired".to_string(),
        })
    }
}
