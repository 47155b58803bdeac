//! Mapping from positional arguments to ledger keys.
//!
//! The write and read handlers derive keys from argument positions in
//! different ways. `PositionalMapping` reproduces that layout exactly:
//!
//! - `addNewTrade [k1, v1, k2, v2]` writes `v1` under `k1` and `v2` under `k2`
//! - `queryTrade [a, b, c, d]` reads keys `a`, `b`, `c`, `d` (then `Counter`)
//!
//! So with the usual call `addNewTrade ["Sku", "W-1", "TraceInfo", "f-A"]`
//! the matching read is `queryTrade ["TransactionId", "Sku", "TradeDate",
//! "TraceInfo"]`, not the write arguments repeated.
//! Alternative schemas plug in through `FieldMapping` without touching
//! dispatch.

use tradeledger_primitives::{ChaincodeError, ChaincodeResult, KeyValue};

/// Turns handler arguments into the ledger keys and values they touch.
///
/// Arity is validated before these methods are called.
pub trait FieldMapping: Send + Sync {
    /// The two caller-supplied entries written by `addNewTrade`, in write order.
    fn trade_writes(&self, args: &[String]) -> ChaincodeResult<[KeyValue; 2]>;

    /// The keys read by `queryTrade`, in read order, before the counter.
    fn query_keys(&self, args: &[String]) -> ChaincodeResult<Vec<String>>;
}

/// The literal positional layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionalMapping;

impl FieldMapping for PositionalMapping {
    fn trade_writes(&self, args: &[String]) -> ChaincodeResult<[KeyValue; 2]> {
        let [sku_key, sku_value, trace_key, trace_value] = args else {
            return Err(arity("addNewTrade", args));
        };
        Ok([
            KeyValue::new(sku_key.as_str(), sku_value.as_str()),
            KeyValue::new(trace_key.as_str(), trace_value.as_str()),
        ])
    }

    fn query_keys(&self, args: &[String]) -> ChaincodeResult<Vec<String>> {
        let [a, b, c, d] = args else {
            return Err(arity("queryTrade", args));
        };
        Ok(vec![a.clone(), b.clone(), c.clone(), d.clone()])
    }
}

fn arity(function: &'static str, args: &[String]) -> ChaincodeError {
    ChaincodeError::ArgumentCount {
        function,
        expected: "4".into(),
        got: args.len(),
    }
}
