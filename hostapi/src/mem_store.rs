//! In-memory versioned ledger for testing.
//!
//! `MemStore` keeps every version of every key, so it can answer history
//! requests. Access goes through a `MemSession`, a view bound to one
//! transaction id: every write made through the session is recorded
//! under that id.

use std::collections::BTreeMap;

use tradeledger_primitives::WriteBatch;

use crate::error::StoreError;
use crate::history::{HistoryCursor, KeyModification};
use crate::state_store::StateStore;
use crate::types::StoreConfig;

/// In-memory versioned store backed by `BTreeMap`.
///
/// BTreeMap is used instead of HashMap for deterministic iteration order.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    entries: BTreeMap<String, Vec<KeyModification>>,
    config: StoreConfig,
    /// Total versions written, across all keys.
    write_count: u64,
}

impl MemStore {
    /// Create a new empty store with default limits and history enabled.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// A store that refuses history requests.
    pub fn without_history() -> Self {
        Self::with_config(StoreConfig::without_history())
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Open a view whose writes are attributed to `tx_id`.
    pub fn session(&mut self, tx_id: impl Into<String>) -> MemSession<'_> {
        MemSession {
            store: self,
            tx_id: tx_id.into(),
        }
    }

    /// Write a value outside of any invocation, e.g. to seed test state.
    pub fn insert(&mut self, write_id: impl Into<String>, key: impl Into<String>, value: Vec<u8>) {
        self.record(write_id.into(), key.into(), value);
    }

    /// Current value of a key.
    pub fn current(&self, key: &str) -> Option<&[u8]> {
        self.entries
            .get(key)
            .and_then(|versions| versions.last())
            .map(|m| m.value.as_slice())
    }

    /// Every recorded version of a key, oldest first.
    pub fn versions(&self, key: &str) -> &[KeyModification] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total versions written, across all keys.
    pub fn write_count(&self) -> u64 {
        self.write_count
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_limits(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        if key.len() > self.config.max_key_len {
            return Err(StoreError::KeyTooLarge {
                len: key.len(),
                max: self.config.max_key_len,
            });
        }
        if value.len() > self.config.max_value_len {
            return Err(StoreError::ValueTooLarge {
                key: key.to_owned(),
                len: value.len(),
                max: self.config.max_value_len,
            });
        }
        Ok(())
    }

    fn record(&mut self, write_id: String, key: String, value: Vec<u8>) {
        self.entries
            .entry(key)
            .or_default()
            .push(KeyModification { write_id, value });
        self.write_count += 1;
    }
}

/// Transaction-scoped view of a `MemStore`.
#[derive(Debug)]
pub struct MemSession<'a> {
    store: &'a mut MemStore,
    tx_id: String,
}

impl MemSession<'_> {
    pub fn tx_id(&self) -> &str {
        &self.tx_id
    }
}

impl StateStore for MemSession<'_> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.store.current(key).map(<[u8]>::to_vec))
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.store.check_limits(key, value)?;
        tracing::trace!(tx_id = %self.tx_id, key, len = value.len(), "mem store put");
        self.store
            .record(self.tx_id.clone(), key.to_owned(), value.to_vec());
        Ok(())
    }

    fn history(&self, key: &str) -> Result<HistoryCursor<'_>, StoreError> {
        if !self.store.config.history_enabled {
            return Err(StoreError::unsupported("history"));
        }
        Ok(HistoryCursor::new(
            self.store.versions(key).iter().cloned().map(Ok),
        ))
    }

    /// All-or-nothing: every entry is checked before any is recorded.
    fn apply_batch(&mut self, batch: WriteBatch) -> Result<(), StoreError> {
        for (key, value) in batch.iter() {
            self.store.check_limits(key, value)?;
        }
        for (key, value) in batch {
            self.store.record(self.tx_id.clone(), key, value);
        }
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.store.entries.contains_key(key))
    }
}
