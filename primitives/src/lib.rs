//! `tradeledger-primitives`: foundational types for the trade ledger engine.
//!
//! This crate provides the ledger key constants, the logical trade record,
//! the invocation boundary types, the error taxonomy, the record codec,
//! identifier generation, and the write batch shared by the engine and
//! the state store adapters.

pub mod types;
pub mod error;
pub mod invocation;
pub mod crypto;
pub mod state;
pub mod codec;

// Re-export commonly used types at the crate root for convenience.
pub use types::{
    KeyValue, TradeRecord, COUNTER_KEY, MAX_KEY_LEN, MAX_VALUE_LEN, SKU_KEY, TRACE_INFO_KEY,
    TRADE_DATE_KEY, TRANSACTION_ID_KEY,
};
pub use error::{ChaincodeError, ChaincodeResult, ErrorKind};
pub use invocation::{Invocation, Response, Status, TxContext};
pub use crypto::{generate_transaction_id, Hash};
pub use state::WriteBatch;
pub use codec::HistoryRecord;
