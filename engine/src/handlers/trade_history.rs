//! `getTradeHistory`: every committed version of one key, oldest first.
//!
//! The store's cursor is consumed lazily and serialized as a JSON array of
//! `{"writeId", "value"}` records. Stores without history support make the
//! call fail as unsupported.

use tradeledger_primitives::{
    codec::{encode_history, HistoryRecord},
    ChaincodeResult,
};

use crate::config::EngineConfig;
use crate::stub::ChaincodeStub;
use crate::validation::{expect_at_least, validate_key};

pub const FUNCTION: &str = "getTradeHistory";

pub fn get_trade_history(
    stub: &ChaincodeStub<'_>,
    config: &EngineConfig,
    args: &[String],
) -> ChaincodeResult<Vec<u8>> {
    expect_at_least(FUNCTION, args, 1)?;
    let key = &args[0];
    if config.validate_keys {
        validate_key(key)?;
    }

    let mut records = Vec::new();
    for modification in stub.history_for_key(key)? {
        let modification = modification?;
        records.push(HistoryRecord::new(modification.write_id, &modification.value));
    }
    tracing::debug!(tx_id = stub.tx_id(), key = %key, versions = records.len(), "trade history");
    encode_history(&records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradeledger_hostapi::MemStore;
    use tradeledger_primitives::{codec::decode_history, ErrorKind, TxContext};

    fn history(store: &mut MemStore, args: &[&str]) -> ChaincodeResult<Vec<u8>> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut session = store.session("reader");
        let stub = ChaincodeStub::new(&mut session, TxContext::new("reader"));
        get_trade_history(&stub, &EngineConfig::default(), &args)
    }

    #[test]
    fn test_versions_oldest_first() {
        let mut store = MemStore::new();
        store.insert("tx1", "Sku", b"A".to_vec());
        store.insert("tx2", "Sku", b"B".to_vec());
        store.insert("tx3", "Sku", b"C".to_vec());

        let records = decode_history(&history(&mut store, &["Sku"]).unwrap()).unwrap();
        assert_eq!(
            records,
            vec![
                HistoryRecord::new("tx1", b"A"),
                HistoryRecord::new("tx2", b"B"),
                HistoryRecord::new("tx3", b"C"),
            ]
        );
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let mut store = MemStore::new();
        store.insert("tx1", "Sku", b"A".to_vec());
        let records = decode_history(&history(&mut store, &["Sku", "ignored"]).unwrap()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_unknown_key_is_empty_array() {
        let mut store = MemStore::new();
        assert_eq!(history(&mut store, &["nothing"]).unwrap(), b"[]");
    }

    #[test]
    fn test_no_arguments() {
        let mut store = MemStore::new();
        let err = history(&mut store, &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentCount);
    }

    #[test]
    fn test_unsupported_without_history() {
        let mut store = MemStore::without_history();
        store.insert("tx1", "Sku", b"A".to_vec());
        let err = history(&mut store, &["Sku"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
    }
}
