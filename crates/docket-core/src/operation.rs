use crate::errors::DocketError;
use std::fmt;
use std::str::FromStr;

/// Operations reachable through the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Read the raw bytes stored under an identifier.
    GetDocket,
    /// Write a Docket payload under an identifier.
    CreateDocket,
    /// Change the status of a stored Docket.
    UpdateDocket,
}

impl Operation {
    /// All operations, in dispatch-table order.
    pub const ALL: [Operation; 3] = [
        Operation::GetDocket,
        Operation::CreateDocket,
        Operation::UpdateDocket,
    ];

    /// Function name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::GetDocket => "GetDocket",
            Operation::CreateDocket => "CreateDocket",
            Operation::UpdateDocket => "UpdateDocket",
        }
    }

    /// Returns true if the operation writes to the ledger.
    pub fn mutates(self) -> bool {
        match self {
            Operation::GetDocket => false,
            Operation::CreateDocket | Operation::UpdateDocket => true,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = DocketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| DocketError::UnknownOperation {
                function: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_wire_name() {
        for op in Operation::ALL {
            assert_eq!(op.as_str().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        let err = "getdocket".parse::<Operation>().unwrap_err();
        assert!(matches!(err, DocketError::UnknownOperation { function } if function == "getdocket"));
    }

    #[test]
    fn only_reads_are_non_mutating() {
        assert!(!Operation::GetDocket.mutates());
        assert!(Operation::CreateDocket.mutates());
        assert!(Operation::UpdateDocket.mutates());
    }
}
