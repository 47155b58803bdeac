//! Core constants and the logical trade record.
//!
//! A trade is not stored as one entry. Each field lives under its own
//! ledger key, and the keys are related only by being written in the same
//! invocation.

use serde::{Deserialize, Serialize};

/// Ledger key holding the identifier generated for the latest trade.
pub const TRANSACTION_ID_KEY: &str = "TransactionId";

/// Ledger key holding the timestamp of the latest trade.
pub const TRADE_DATE_KEY: &str = "TradeDate";

/// Conventional ledger key for the SKU field.
pub const SKU_KEY: &str = "Sku";

/// Conventional ledger key for the trace-info field.
pub const TRACE_INFO_KEY: &str = "TraceInfo";

/// Ledger key of the write counter.
pub const COUNTER_KEY: &str = "Counter";

/// Maximum key length accepted by the reference store.
pub const MAX_KEY_LEN: usize = 256;

/// Maximum value length accepted by the reference store.
pub const MAX_VALUE_LEN: usize = 65_536; // 64 KiB

/// A caller-supplied ledger entry: the key to write and the value to store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// The logical trade record assembled from its independent ledger entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TradeRecord {
    transaction_id: String,
    sku: String,
    trade_date: String,
    trace_info: String,
    counter: u64,
}

impl TradeRecord {
    pub fn new(
        transaction_id: impl Into<String>,
        sku: impl Into<String>,
        trade_date: impl Into<String>,
        trace_info: impl Into<String>,
        counter: u64,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            sku: sku.into(),
            trade_date: trade_date.into(),
            trace_info: trace_info.into(),
            counter,
        }
    }

    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn trade_date(&self) -> &str {
        &self.trade_date
    }

    pub fn trace_info(&self) -> &str {
        &self.trace_info
    }

    /// Value of the write counter at the time the record was read.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Build a record from a `queryTrade` payload issued with the standard
    /// key layout `[TransactionId, Sku, TradeDate, TraceInfo]`.
    ///
    /// Returns `None` if the payload does not have exactly five fields.
    /// A counter that does not parse reads as zero, the same as the engine.
    pub fn from_query_response(payload: &[u8]) -> Option<Self> {
        let fields = crate::codec::decode_query_response(payload);
        let [transaction_id, sku, trade_date, trace_info, counter]: [String; 5] =
            fields.try_into().ok()?;
        Some(Self {
            transaction_id,
            sku,
            trade_date,
            trace_info,
            counter: crate::codec::parse_counter(Some(counter.as_bytes())),
        })
    }
}
