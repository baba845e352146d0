use crate::operation::Operation;
use docket_store::StoreError;
use thiserror::Error;

/// Errors returned by Docket operations.
///
/// Nothing is retried or recovered internally. Each variant carries the
/// identifier or resolved caller needed for audit logging upstream.
#[derive(Error, Debug)]
pub enum DocketError {
    /// Too few arguments, or a required argument was empty.
    #[error("{operation} requires argument `{argument}`")]
    MissingArgument {
        /// Operation that was called.
        operation: Operation,
        /// Name of the missing argument.
        argument: &'static str,
    },
    /// The ledger failed a read or write.
    #[error("ledger access failed for docket {puuid}: {source}")]
    StorageFailure {
        /// Identifier being accessed.
        puuid: String,
        /// Ledger error, unmodified.
        #[source]
        source: StoreError,
    },
    /// The write is durable but its event could not be emitted.
    #[error("docket {puuid} was written but the {event} event was not delivered: {source}")]
    EventDeliveryFailure {
        /// Identifier that was written.
        puuid: String,
        /// Event type that was lost.
        event: &'static str,
        /// Sink error, unmodified.
        #[source]
        source: StoreError,
    },
    /// The caller does not hold the privileged role.
    #[error("{username} with role {role} does not have access to {operation}")]
    Unauthorized {
        /// Resolved username (empty if unreadable).
        username: String,
        /// Resolved role (empty if unreadable).
        role: String,
        /// Operation that was refused.
        operation: Operation,
    },
    /// No Docket is stored under the identifier.
    #[error("no docket stored under {puuid}")]
    NotFound {
        /// Identifier that was looked up.
        puuid: String,
    },
    /// Stored bytes under the identifier do not decode as a Docket.
    #[error("docket {puuid} could not be decoded: {source}")]
    MalformedRecord {
        /// Identifier whose value is malformed.
        puuid: String,
        /// Decode error.
        #[source]
        source: serde_json::Error,
    },
    /// A record or event could not be encoded.
    #[error("encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
    /// The function name does not map to an enabled operation.
    #[error("unknown operation: {function}")]
    UnknownOperation {
        /// Function name as received.
        function: String,
    },
    /// A mutating operation was sent through the query entry point.
    #[error("{operation} modifies the ledger and cannot run as a query")]
    NotQueryable {
        /// Operation that was refused.
        operation: Operation,
    },
}

/// Errors reading an attribute from the caller's credential.
#[derive(Error, Debug)]
pub enum CredentialError {
    /// The credential carries no such attribute.
    #[error("attribute {name} is not present in the caller's credential")]
    Missing {
        /// Attribute name.
        name: String,
    },
    /// The attribute exists but could not be verified.
    #[error("attribute {name} could not be verified: {reason}")]
    Unverifiable {
        /// Attribute name.
        name: String,
        /// Verifier message.
        reason: String,
    },
}

/// Errors loading service configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Configuration is not valid JSON for [`ServiceConfig`](crate::ServiceConfig).
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// A configured value is not usable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
