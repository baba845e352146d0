use crate::credentials::CredentialSource;
use crate::errors::DocketError;
use crate::operation::Operation;
use tracing::{debug, warn};

/// Default role label allowed to mutate Dockets.
pub const PRIVILEGED_ROLE: &str = "Bank_Home_Loan_Admin";

/// Credential attribute naming the caller.
pub const USERNAME_ATTRIBUTE: &str = "username";

/// Credential attribute carrying the caller's role.
pub const ROLE_ATTRIBUTE: &str = "role";

/// Caller identity as resolved from credential attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// Resolved username; empty if unreadable.
    pub username: String,
    /// Resolved role; empty if unreadable.
    pub role: String,
}

impl Caller {
    /// Reads `username` and `role` from the credential.
    ///
    /// Unreadable attributes resolve to the empty string and are logged at
    /// `warn`. An empty role never satisfies [`RolePolicy`], so read failures
    /// deny.
    pub fn resolve(credentials: &dyn CredentialSource) -> Self {
        Self {
            username: read_or_empty(credentials, USERNAME_ATTRIBUTE),
            role: read_or_empty(credentials, ROLE_ATTRIBUTE),
        }
    }
}

fn read_or_empty(credentials: &dyn CredentialSource, name: &str) -> String {
    match credentials.read_attribute(name) {
        Ok(value) => value,
        Err(e) => {
            warn!(attribute = name, error = %e, "could not read credential attribute");
            String::new()
        }
    }
}

/// Exact-match role predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePolicy {
    privileged_role: String,
}

impl RolePolicy {
    /// Creates a policy admitting exactly `privileged_role`.
    pub fn new(privileged_role: impl Into<String>) -> Self {
        Self {
            privileged_role: privileged_role.into(),
        }
    }

    /// Role label this policy admits.
    pub fn privileged_role(&self) -> &str {
        &self.privileged_role
    }

    /// Admits `caller` for `operation` if its role matches exactly.
    pub fn authorize(&self, caller: &Caller, operation: Operation) -> Result<(), DocketError> {
        if !caller.role.is_empty() && caller.role == self.privileged_role {
            debug!(username = %caller.username, %operation, "caller authorized");
            return Ok(());
        }
        warn!(
            username = %caller.username,
            role = %caller.role,
            %operation,
            "caller denied"
        );
        Err(DocketError::Unauthorized {
            username: caller.username.clone(),
            role: caller.role.clone(),
            operation,
        })
    }
}

impl Default for RolePolicy {
    fn default() -> Self {
        Self::new(PRIVILEGED_ROLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::StaticCredentials;

    fn caller(role: &str) -> Caller {
        Caller {
            username: "alice".to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn privileged_role_is_admitted() {
        let policy = RolePolicy::default();
        assert!(policy
            .authorize(&caller("Bank_Home_Loan_Admin"), Operation::CreateDocket)
            .is_ok());
    }

    #[test]
    fn match_is_exact() {
        let policy = RolePolicy::default();
        for role in ["bank_home_loan_admin", "Bank_Home_Loan_Admin ", "Teller", ""] {
            let err = policy
                .authorize(&caller(role), Operation::CreateDocket)
                .unwrap_err();
            match err {
                DocketError::Unauthorized { username, role: r, .. } => {
                    assert_eq!(username, "alice");
                    assert_eq!(r, role);
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }

    #[test]
    fn empty_policy_role_admits_nobody() {
        let policy = RolePolicy::new("");
        assert!(policy.authorize(&caller(""), Operation::UpdateDocket).is_err());
    }

    #[test]
    fn unreadable_attributes_resolve_empty() {
        let creds = StaticCredentials::new().with_attribute("username", "bob");
        let resolved = Caller::resolve(&creds);
        assert_eq!(resolved.username, "bob");
        assert_eq!(resolved.role, "");
    }

    #[test]
    fn denial_message_names_caller_and_role() {
        let err = RolePolicy::default()
            .authorize(&caller("Teller"), Operation::CreateDocket)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "alice with role Teller does not have access to CreateDocket"
        );
    }
}
