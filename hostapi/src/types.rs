//! Store-side configuration.
//!
//! `StoreConfig` bundles the limits and capabilities of the in-memory
//! reference store. Defaults match the limits in `tradeledger-primitives`.

use serde::Deserialize;
use tradeledger_primitives::{MAX_KEY_LEN, MAX_VALUE_LEN};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Whether the store answers per-key history requests.
    pub history_enabled: bool,
    /// Maximum length of a key in bytes.
    pub max_key_len: usize,
    /// Maximum length of a value in bytes.
    pub max_value_len: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            history_enabled: true,
            max_key_len: MAX_KEY_LEN,
            max_value_len: MAX_VALUE_LEN,
        }
    }
}

impl StoreConfig {
    /// Same limits, but history requests fail as unsupported.
    pub fn without_history() -> Self {
        Self {
            history_enabled: false,
            ..Self::default()
        }
    }

    /// Parse a TOML fragment. Missing fields take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
