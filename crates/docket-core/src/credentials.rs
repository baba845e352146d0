use crate::errors::CredentialError;
use std::collections::BTreeMap;

/// Source of verified attributes from the caller's credential.
pub trait CredentialSource {
    /// Returns the verified value of attribute `name`.
    fn read_attribute(&self, name: &str) -> Result<String, CredentialError>;
}

/// Fixed attribute set, e.g. supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    attributes: BTreeMap<String, String>,
}

impl StaticCredentials {
    /// Creates a credential with no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

impl CredentialSource for StaticCredentials {
    fn read_attribute(&self, name: &str) -> Result<String, CredentialError> {
        self.attributes
            .get(name)
            .cloned()
            .ok_or_else(|| CredentialError::Missing {
                name: name.to_string(),
            })
    }
}
