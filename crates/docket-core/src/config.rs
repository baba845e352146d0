use crate::authorization::PRIVILEGED_ROLE;
use crate::errors::ConfigError;
use docket_model::DEFAULT_EVENT_NAME;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Service configuration. Absent keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Role label allowed to mutate Dockets.
    pub privileged_role: String,
    /// Name under which events are emitted.
    pub event_name: String,
    /// Whether `UpdateDocket` is reachable through the dispatcher.
    pub allow_update: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            privileged_role: PRIVILEGED_ROLE.to_string(),
            event_name: DEFAULT_EVENT_NAME.to_string(),
            allow_update: true,
        }
    }
}

impl ServiceConfig {
    /// Parses configuration from JSON bytes.
    ///
    /// An empty `privileged_role` is rejected: an unreadable role attribute
    /// resolves to the empty string and must never match.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: ServiceConfig = serde_json::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let bytes = std::fs::read(path)?;
        Self::from_json_slice(&bytes)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.privileged_role.is_empty() {
            return Err(ConfigError::Invalid(
                "privileged_role must not be empty".to_string(),
            ));
        }
        if self.event_name.is_empty() {
            return Err(ConfigError::Invalid("event_name must not be empty".to_string()));
        }
        Ok(())
    }
}
