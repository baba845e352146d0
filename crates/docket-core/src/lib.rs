//! Docket service: record lifecycle and access control.
//!
//! This crate provides:
//! - `DocketService` with the Get, Create and Update operations
//! - The role predicate gating every mutation
//! - A closed `Operation` mapping and the `Dispatcher` entry points
//!
//! Core invariants:
//! - The service holds no state between calls; everything durable lives in
//!   the ledger passed in through a per-invocation [`Stub`]
//! - Reads are never gated; mutations require the privileged role
//! - Exactly one event follows each successful mutation, none otherwise
//! - No collaborator failure is retried
//!
#![deny(missing_docs)]

/// Role predicate gating mutations.
pub mod authorization;
/// Service configuration.
pub mod config;
/// Caller credential attributes.
pub mod credentials;
/// Named-operation entry points.
pub mod dispatcher;
/// Error types for service operations.
pub mod errors;
/// Closed set of operations.
pub mod operation;
/// Docket operations.
pub mod service;

pub use authorization::{Caller, RolePolicy, PRIVILEGED_ROLE};
pub use config::ServiceConfig;
pub use credentials::{CredentialSource, StaticCredentials};
pub use dispatcher::Dispatcher;
pub use errors::{ConfigError, CredentialError, DocketError};
pub use operation::Operation;
pub use service::{DocketService, Stub};
