//! State Store Adapter contract.
//!
//! `StateStore` is the only way the engine reaches the ledger:
//! single-key get, single-key put, and (optionally) per-key history.
//! Storage, versioning, and conflict detection belong to the
//! implementation.
//!
//! Implementations:
//! - `MemSession` (this crate): a transaction-scoped view of `MemStore`
//! - peer-backed adapters provided by the hosting platform

use tradeledger_primitives::WriteBatch;

use crate::error::StoreError;
use crate::history::HistoryCursor;

/// Abstraction over the versioned key-value ledger.
///
/// An adapter instance is scoped to one invocation. Writes it accepts are
/// attributed to that invocation's transaction.
pub trait StateStore: Send {
    /// Get the current value of a key. `Ok(None)` if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write a value, appending a new version of the key.
    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Iterate the key's versions, oldest first.
    ///
    /// Default implementation reports the operation as unsupported.
    fn history(&self, key: &str) -> Result<HistoryCursor<'_>, StoreError> {
        let _ = key;
        Err(StoreError::unsupported("history"))
    }

    /// Apply a batch of writes.
    ///
    /// Default implementation puts each entry in write order and stops at the
    /// first failure, so it is only as atomic as `put`. Backends that can
    /// commit all-or-nothing should override it.
    fn apply_batch(&mut self, batch: WriteBatch) -> Result<(), StoreError> {
        for (key, value) in batch {
            self.put(&key, &value)?;
        }
        Ok(())
    }

    /// Check if a key exists.
    ///
    /// Default implementation uses `get()`, but backends may optimize this.
    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }
}
