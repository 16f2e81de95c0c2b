//! Match configuration.
//!
//! `MatchConfig` carries everything the manager needs to set up a match:
//! the target score, the dice seed and the two seat names. It
//! deserializes from any serde format so a frontend can hand it over as-is.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rules::Rule;

/// Default points needed to win a match.
pub const DEFAULT_MATCH_LENGTH: u32 = 5;

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchConfig {
    /// Points needed to win the match.
    pub length: u32,

    /// Seed for the match's dice stream.
    pub seed: u64,

    /// Host seat name (plays White).
    pub host_name: String,

    /// Guest seat name (plays Black).
    pub guest_name: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_MATCH_LENGTH,
            seed: 0,
            host_name: "Player 1".to_string(),
            guest_name: "Player 2".to_string(),
        }
    }
}

impl MatchConfig {
    /// Configuration using the rule's default match length.
    #[must_use]
    pub fn for_rule<R: Rule>(rule: &R) -> Self {
        Self {
            length: rule.default_match_length(),
            ..Self::default()
        }
    }

    /// Set the match length.
    #[must_use]
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = length;
        self
    }

    /// Set the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set both seat names.
    #[must_use]
    pub fn with_names(mut self, host: impl Into<String>, guest: impl Into<String>) -> Self {
        self.host_name = host.into();
        self.guest_name = guest.into();
        self
    }

    /// Check the configuration can start a match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if self.host_name.trim().is_empty() || self.guest_name.trim().is_empty() {
            return Err(ConfigError::EmptyPlayerName);
        }
        Ok(())
    }
}
