//! Shared test helpers for integration tests.
//!
//! Provides argument builders, a fixed transaction clock, invocation
//! shortcuts, and `FaultyStore`, a wrapper that injects adapter failures.

#![allow(dead_code)]

use tradeledger_engine::{EngineConfig, TradeChaincode};
use tradeledger_hostapi::{HistoryCursor, MemSession, MemStore, StateStore, StoreError};
use tradeledger_primitives::{Response, TxContext, WriteBatch};

/// 2017-06-01 12:00:00 UTC.
pub const FIXED_TIME: i64 = 1_496_318_400;

pub const FIXED_TRADE_DATE: &str = "2017-06-01 12:00:00 +0000 UTC";

/// Install a test-writer subscriber once. Later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The usual write arguments.
pub fn trade_args(sku: &str, trace: &str) -> Vec<String> {
    strings(&["Sku", sku, "TraceInfo", trace])
}

/// Keys that read back a trade written with `trade_args`.
pub fn record_query_args() -> Vec<String> {
    strings(&["TransactionId", "Sku", "TradeDate", "TraceInfo"])
}

pub fn tx(tx_id: &str) -> TxContext {
    TxContext::new(tx_id).at_unix(FIXED_TIME)
}

/// Context for a signed proposal on `channel`, with the peer-derived id and
/// the fixed clock.
pub fn proposal_tx(nonce: &[u8], creator: &[u8], channel: &str) -> TxContext {
    TxContext::for_proposal(nonce, creator, channel).at_unix(FIXED_TIME)
}

/// Run one `invoke` against the store as transaction `tx_id`.
pub fn invoke(
    chaincode: &TradeChaincode,
    store: &mut MemStore,
    tx_id: &str,
    function: &str,
    args: &[String],
) -> Response {
    init_tracing();
    let mut session = store.session(tx_id);
    let mut stub = chaincode.stub(&mut session, tx(tx_id));
    chaincode.invoke(&mut stub, function, args)
}

/// Run one `init` against the store as transaction `tx_id`.
pub fn init(chaincode: &TradeChaincode, store: &mut MemStore, tx_id: &str, args: &[String]) -> Response {
    init_tracing();
    let mut session = store.session(tx_id);
    let mut stub = chaincode.stub(&mut session, tx(tx_id));
    chaincode.init(&mut stub, args)
}

pub fn buffered() -> TradeChaincode {
    TradeChaincode::new(EngineConfig::default())
}

pub fn direct() -> TradeChaincode {
    TradeChaincode::new(EngineConfig::direct())
}

// ── Fault injection ──

/// Wraps a `MemSession` and fails selected operations.
pub struct FaultyStore<'a> {
    inner: MemSession<'a>,
    /// Fail the n-th `put` (1-based).
    pub fail_put_at: Option<usize>,
    /// Fail every `get` of this key.
    pub fail_get_of: Option<String>,
    /// Reject every batch before applying any of it.
    pub fail_batches: bool,
    puts: usize,
}

impl<'a> FaultyStore<'a> {
    pub fn new(inner: MemSession<'a>) -> Self {
        Self {
            inner,
            fail_put_at: None,
            fail_get_of: None,
            fail_batches: false,
            puts: 0,
        }
    }

    pub fn failing_put(inner: MemSession<'a>, n: usize) -> Self {
        Self {
            fail_put_at: Some(n),
            ..Self::new(inner)
        }
    }

    pub fn failing_get(inner: MemSession<'a>, key: &str) -> Self {
        Self {
            fail_get_of: Some(key.to_owned()),
            ..Self::new(inner)
        }
    }

    pub fn failing_batches(inner: MemSession<'a>) -> Self {
        Self {
            fail_batches: true,
            ..Self::new(inner)
        }
    }
}

impl StateStore for FaultyStore<'_> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        if self.fail_get_of.as_deref() == Some(key) {
            return Err(StoreError::backend(format!("injected read failure on {key}")));
        }
        self.inner.get(key)
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.puts += 1;
        if self.fail_put_at == Some(self.puts) {
            return Err(StoreError::backend(format!(
                "injected write failure at put {} ({key})",
                self.puts
            )));
        }
        self.inner.put(key, value)
    }

    fn history(&self, key: &str) -> Result<HistoryCursor<'_>, StoreError> {
        self.inner.history(key)
    }

    fn apply_batch(&mut self, batch: WriteBatch) -> Result<(), StoreError> {
        if self.fail_batches {
            return Err(StoreError::backend("injected batch rejection"));
        }
        self.inner.apply_batch(batch)
    }
}

/// Flat get/put adapter with no history and the default batch replay.
/// Records every `put` key and rejects puts of one chosen key.
#[derive(Default)]
pub struct PutOnlyStore {
    pub data: std::collections::BTreeMap<String, Vec<u8>>,
    pub put_log: Vec<String>,
    pub reject_key: Option<String>,
}

impl PutOnlyStore {
    pub fn rejecting(key: &str) -> Self {
        Self {
            reject_key: Some(key.to_owned()),
            ..Self::default()
        }
    }
}

impl StateStore for PutOnlyStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.put_log.push(key.to_owned());
        if self.reject_key.as_deref() == Some(key) {
            return Err(StoreError::backend(format!("put {key} rejected")));
        }
        self.data.insert(key.to_owned(), value.to_vec());
        Ok(())
    }
}
