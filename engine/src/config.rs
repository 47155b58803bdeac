//! Engine configuration.
//!
//! `EngineConfig` is immutable for the lifetime of a `TradeChaincode` and
//! is shared by every invocation. It can be built in code or parsed from
//! a TOML fragment:
//!
//! ```toml
//! write_mode = "direct"
//! validate_keys = false
//! ```

use serde::Deserialize;

/// How handler writes reach the state store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Writes are buffered and committed in one `apply_batch` call after the
    /// handler succeeds. A failed handler leaves the store untouched.
    #[default]
    Buffered,
    /// Writes go straight to the store. A failure part-way through leaves
    /// the earlier writes applied; nothing is rolled back.
    Direct,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub write_mode: WriteMode,
    /// Reject empty keys in handler arguments before any store access.
    pub validate_keys: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            write_mode: WriteMode::Buffered,
            validate_keys: true,
        }
    }
}

impl EngineConfig {
    /// Config that reproduces the unbuffered, unvalidated write path.
    pub fn direct() -> Self {
        Self {
            write_mode: WriteMode::Direct,
            validate_keys: false,
        }
    }

    /// Parse a TOML fragment. Missing fields take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
