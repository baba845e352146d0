//! Verification helpers for journal state entries.

use crate::record::StateEntry;
use docket_model::ValueDigest;

/// Outcome of checking a state entry against its recorded digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryVerdict {
    /// The stored value matches its digest.
    Ok,
    /// The stored value does not match its digest.
    Mismatch {
        /// Digest recorded at write time.
        recorded: ValueDigest,
        /// Digest of the bytes actually stored.
        computed: ValueDigest,
    },
}

impl EntryVerdict {
    /// Returns true for [`EntryVerdict::Ok`].
    pub fn is_ok(&self) -> bool {
        matches!(self, EntryVerdict::Ok)
    }
}

/// Recomputes the digest of `entry.value` and compares it with the recorded one.
pub fn verify_state_entry(entry: &StateEntry) -> EntryVerdict {
    let computed = ValueDigest::of(&entry.value);
    if computed == entry.digest {
        EntryVerdict::Ok
    } else {
        EntryVerdict::Mismatch {
            recorded: entry.digest.clone(),
            computed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_entry_verifies() {
        let entry = StateEntry::new("item-001", b"payload".to_vec());
        assert!(verify_state_entry(&entry).is_ok());
    }

    #[test]
    fn tampered_value_is_reported() {
        let mut entry = StateEntry::new("item-001", b"payload".to_vec());
        entry.value = b"tampered".to_vec();
        match verify_state_entry(&entry) {
            EntryVerdict::Mismatch { recorded, computed } => {
                assert_eq!(recorded, ValueDigest::of(b"payload"));
                assert_eq!(computed, ValueDigest::of(b"tampered"));
            }
            EntryVerdict::Ok => panic!("expected mismatch"),
        }
    }
}
