//! Record model for identity-linked Docket entries.
//!
//! These types define the on-ledger representation of a Docket and the
//! payloads emitted alongside ledger writes. Field names are stable,
//! lower-case interchange keys; every field is always serialized.
//!
#![deny(missing_docs)]

/// Value digests over stored bytes.
pub mod digest;
/// Event payloads emitted on ledger writes.
pub mod event;
/// Identifier newtypes.
pub mod identifiers;
/// Docket record blocks and the aggregate.
pub mod records;

pub use digest::{DigestAlg, ValueDigest};
pub use event::{DocketEvent, EventType, DEFAULT_EVENT_NAME};
pub use identifiers::{PidStatus, Puuid};
pub use records::{Docket, DocketAccess, ItemPid, ItemSids};
