//! `queryTrade`: read the keys named by the arguments plus the counter.
//!
//! Reads `args[0]`, `args[1]`, `args[2]`, `args[3]`, then `Counter`, and
//! answers with the five values joined by `,`. Missing keys contribute
//! empty fields.

use tradeledger_primitives::{codec::encode_query_response, ChaincodeResult, COUNTER_KEY};

use crate::mapping::FieldMapping;
use crate::stub::ChaincodeStub;
use crate::validation::expect_exact;

pub const FUNCTION: &str = "queryTrade";

pub fn query_trade(
    stub: &ChaincodeStub<'_>,
    mapping: &dyn FieldMapping,
    args: &[String],
) -> ChaincodeResult<Vec<u8>> {
    expect_exact(FUNCTION, args, 4)?;
    let mut keys = mapping.query_keys(args)?;
    keys.push(COUNTER_KEY.to_owned());

    let mut values = Vec::with_capacity(keys.len());
    for key in &keys {
        values.push(stub.get_state(key)?);
    }
    let payload = encode_query_response(values);
    tracing::debug!(tx_id = stub.tx_id(), len = payload.len(), "query trade");
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::PositionalMapping;
    use tradeledger_hostapi::MemStore;
    use tradeledger_primitives::{ErrorKind, TxContext};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn query(store: &mut MemStore, args: &[&str]) -> ChaincodeResult<Vec<u8>> {
        let mut session = store.session("reader");
        let stub = ChaincodeStub::new(&mut session, TxContext::new("reader"));
        query_trade(&stub, &PositionalMapping, &strings(args))
    }

    #[test]
    fn test_reads_in_argument_order_then_counter() {
        let mut store = MemStore::new();
        store.insert("tx1", "TransactionId", b"id-1".to_vec());
        store.insert("tx1", "Sku", b"WIDGET-1".to_vec());
        store.insert("tx1", "TradeDate", b"date".to_vec());
        store.insert("tx1", "TraceInfo", b"factory-A".to_vec());
        store.insert("tx1", "Counter", b"1".to_vec());

        let payload = query(&mut store, &["TransactionId", "Sku", "TradeDate", "TraceInfo"]).unwrap();
        assert_eq!(payload, b"id-1,WIDGET-1,date,factory-A,1");
    }

    #[test]
    fn test_missing_keys_are_empty_fields() {
        let mut store = MemStore::new();
        let payload = query(&mut store, &["a", "b", "c", "d"]).unwrap();
        assert_eq!(payload, b",,,,");
    }

    #[test]
    fn test_arity_is_validated() {
        let mut store = MemStore::new();
        let err = query(&mut store, &["a", "b"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentCount);
        let err = query(&mut store, &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentCount);
    }

    #[test]
    fn test_non_utf8_values_are_lossy() {
        let mut store = MemStore::new();
        store.insert("tx1", "a", vec![0x66, 0xff]);
        let payload = query(&mut store, &["a", "b", "c", "d"]).unwrap();
        assert_eq!(String::from_utf8(payload).unwrap(), "f\u{fffd},,,,");
    }
}
