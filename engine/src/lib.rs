//! `tradeledger-engine`: the trade ledger state-transition engine.
//!
//! The engine is invoked once per transaction. It reads and writes the
//! ledger only through a `StateStore` adapter and keeps no state between
//! invocations.
//!
//! ## Modules
//!
//! - `dispatcher`: `TradeChaincode`: init / invoke / query entry points
//! - `handlers`: `addNewTrade`, `queryTrade`, `getTradeHistory`
//! - `stub`: `ChaincodeStub`, the per-invocation context
//! - `mapping`: positional argument to ledger key mapping
//! - `validation`: argument checks run before any store access
//! - `config`: `EngineConfig` and `WriteMode`

pub mod config;
pub mod dispatcher;
pub mod handlers;
pub mod mapping;
pub mod stub;
pub mod validation;

pub use config::{EngineConfig, WriteMode};
pub use dispatcher::{Function, TradeChaincode};
pub use mapping::{FieldMapping, PositionalMapping};
pub use stub::ChaincodeStub;
