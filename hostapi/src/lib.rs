//! `tradeledger-hostapi`: the State Store Adapter contract.
//!
//! This crate defines how the engine reaches the external ledger.
//! It provides:
//!
//! - `StateStore` trait: get / put / history / batch commit
//! - `HistoryCursor`: lazy, forward-only per-key version history
//! - `MemStore`: in-memory versioned `StateStore` for testing
//! - `StoreConfig`: limits and capabilities of the reference store
//! - `StoreError`: adapter error type with `ChaincodeError` conversion

pub mod error;
pub mod types;
pub mod history;
pub mod state_store;
pub mod mem_store;

// Re-export commonly used types at the crate root.
pub use error::StoreError;
pub use types::StoreConfig;
pub use history::{HistoryCursor, KeyModification};
pub use state_store::StateStore;
pub use mem_store::{MemSession, MemStore};
