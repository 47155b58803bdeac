//! State store error type.
//!
//! `StoreError` is returned by every `StateStore` method. The engine turns
//! it into a failure response: `Unsupported` becomes an unsupported
//! operation, everything else becomes a store error whose message is the
//! adapter's message verbatim.

use tradeledger_primitives::ChaincodeError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The adapter does not implement this operation.
    #[error("{operation} is not supported by this state store")]
    Unsupported { operation: &'static str },

    /// Keys must be non-empty.
    #[error("key must not be an empty string")]
    EmptyKey,

    /// Key exceeds the adapter's limit.
    #[error("key too large: {len} bytes exceeds limit of {max}")]
    KeyTooLarge { len: usize, max: usize },

    /// Value exceeds the adapter's limit.
    #[error("value too large for key {key:?}: {len} bytes exceeds limit of {max}")]
    ValueTooLarge { key: String, len: usize, max: usize },

    /// Backend failure, carried as the backend reported it.
    #[error("{0}")]
    Backend(String),
}

impl StoreError {
    pub fn unsupported(operation: &'static str) -> Self {
        Self::Unsupported { operation }
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

impl From<StoreError> for ChaincodeError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unsupported { .. } => Self::UnsupportedOperation(err.to_string()),
            other => Self::Store(other.to_string()),
        }
    }
}
