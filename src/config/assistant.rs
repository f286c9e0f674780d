//! Assistant behaviour configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::remediation::DEFAULT_REFERENCE_PREFIX;

/// Settings for the conversation itself
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// Prefix of generated reference numbers (`<PREFIX>-1234567`)
    #[serde(default = "default_reference_prefix")]
    pub reference_prefix: String,

    /// Fixed seed for reference numbers; entropy when unset
    #[serde(default)]
    pub reference_seed: Option<u64>,
}

impl AssistantConfig {
    /// Validate assistant configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.reference_prefix.is_empty() {
            return Err(ValidationError::MissingRequired("assistant.reference_prefix"));
        }
        if !self
            .reference_prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric())
        {
            return Err(ValidationError::InvalidReferencePrefix);
        }
        Ok(())
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reference_prefix: default_reference_prefix(),
            reference_seed: None,
        }
    }
}

fn default_reference_prefix() -> String {
    DEFAULT_REFERENCE_PREFIX.to_string()
}
