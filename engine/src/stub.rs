//! Per-invocation context.
//!
//! A `ChaincodeStub` is created for one invocation and threaded through
//! the dispatcher and handlers. It holds the state store reference, the
//! transaction context, and the writes made so far. Nothing in it
//! outlives the invocation.
//!
//! In `Buffered` mode reads see this invocation's writes first and then
//! fall through to the store. In `Direct` mode every access goes straight
//! to the store.

use tradeledger_hostapi::{HistoryCursor, StateStore};
use tradeledger_primitives::{ChaincodeResult, Hash, TxContext, WriteBatch};

use crate::config::WriteMode;

pub struct ChaincodeStub<'a> {
    store: &'a mut dyn StateStore,
    tx: TxContext,
    mode: WriteMode,
    /// Writes of this invocation. Pending in `Buffered` mode, a record of
    /// what was already applied in `Direct` mode.
    writes: WriteBatch,
    /// Digest of the last committed write set.
    committed_digest: Option<Hash>,
}

impl<'a> ChaincodeStub<'a> {
    /// Create a stub in `Buffered` mode.
    pub fn new(store: &'a mut dyn StateStore, tx: TxContext) -> Self {
        Self {
            store,
            tx,
            mode: WriteMode::default(),
            writes: WriteBatch::new(),
            committed_digest: None,
        }
    }

    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn tx_context(&self) -> &TxContext {
        &self.tx
    }

    pub fn tx_id(&self) -> &str {
        &self.tx.tx_id
    }

    pub fn write_mode(&self) -> WriteMode {
        self.mode
    }

    /// Read the current value of a key.
    pub fn get_state(&self, key: &str) -> ChaincodeResult<Option<Vec<u8>>> {
        if self.mode == WriteMode::Buffered {
            if let Some(value) = self.writes.get(key) {
                tracing::debug!(key, source = "batch", "get state");
                return Ok(Some(value.to_vec()));
            }
        }
        tracing::debug!(key, source = "store", "get state");
        Ok(self.store.get(key)?)
    }

    /// Write a value.
    pub fn put_state(&mut self, key: &str, value: &[u8]) -> ChaincodeResult<()> {
        tracing::debug!(key, len = value.len(), mode = ?self.mode, "put state");
        if self.mode == WriteMode::Direct {
            self.store.put(key, value)?;
        }
        self.writes.put(key, value);
        Ok(())
    }

    /// Committed history of a key. Writes still pending in this
    /// invocation are not part of it.
    pub fn history_for_key(&self, key: &str) -> ChaincodeResult<HistoryCursor<'_>> {
        tracing::debug!(key, "history for key");
        Ok(self.store.history(key)?)
    }

    /// Writes made so far in this invocation.
    pub fn pending_writes(&self) -> &WriteBatch {
        &self.writes
    }

    /// Digest of the write set committed by the last successful invocation.
    pub fn write_set_digest(&self) -> Option<Hash> {
        self.committed_digest
    }

    /// Finish a successful invocation. In `Buffered` mode this hands the
    /// batch to the store in one call.
    pub(crate) fn commit(&mut self) -> ChaincodeResult<()> {
        let writes = std::mem::take(&mut self.writes);
        let digest = writes.digest();
        if self.mode == WriteMode::Buffered && !writes.is_empty() {
            tracing::debug!(entries = writes.len(), bytes = writes.total_write_bytes(), "commit batch");
            self.store.apply_batch(writes)?;
        }
        self.committed_digest = Some(digest);
        Ok(())
    }

    /// Finish a failed invocation. Buffered writes are dropped; writes
    /// already applied in `Direct` mode stay applied.
    pub(crate) fn discard(&mut self) {
        if self.mode == WriteMode::Buffered && !self.writes.is_empty() {
            tracing::debug!(entries = self.writes.len(), "discard batch");
        }
        self.writes = WriteBatch::new();
        self.committed_digest = None;
    }
}

impl core::fmt::Debug for ChaincodeStub<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChaincodeStub")
            .field("tx", &self.tx)
            .field("mode", &self.mode)
            .field("writes", &self.writes.len())
            .finish_non_exhaustive()
    }
}
