//! Error taxonomy for the trade ledger engine.
//!
//! Every failure surfaces to the caller as a structured failure response
//! carrying an [`ErrorKind`] and a human-readable message. Nothing is
//! retried and nothing is swallowed.

use core::fmt;

/// Stable classification of an engine failure.
///
/// The repr values are part of the response surface and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorKind {
    /// Wrong number of positional arguments.
    ArgumentCount = 1,
    /// Dispatch miss on the function name.
    UnknownFunction = 2,
    /// Query-class call at init time, or history on a store without it.
    UnsupportedOperation = 3,
    /// Adapter read or write failure.
    Store = 4,
    /// Argument has the right arity but an unusable shape.
    InvalidArgument = 5,
}

impl ErrorKind {
    /// Convert from the numeric code carried in a response.
    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(Self::ArgumentCount),
            2 => Some(Self::UnknownFunction),
            3 => Some(Self::UnsupportedOperation),
            4 => Some(Self::Store),
            5 => Some(Self::InvalidArgument),
            _ => None,
        }
    }

    pub fn as_u16(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArgumentCount => write!(f, "ERR_ARGUMENT_COUNT"),
            Self::UnknownFunction => write!(f, "ERR_UNKNOWN_FUNCTION"),
            Self::UnsupportedOperation => write!(f, "ERR_UNSUPPORTED_OPERATION"),
            Self::Store => write!(f, "ERR_STORE"),
            Self::InvalidArgument => write!(f, "ERR_INVALID_ARGUMENT"),
        }
    }
}

/// Engine error type returned by every handler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChaincodeError {
    /// Wrong number of positional arguments.
    #[error("incorrect number of arguments for {function}: expecting {expected}, got {got}")]
    ArgumentCount {
        function: &'static str,
        expected: String,
        got: usize,
    },

    /// No handler is registered under this function name.
    #[error("received unknown function invocation: {0:?}")]
    UnknownFunction(String),

    /// The operation is not reachable on this path or adapter.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// The state store reported a failure; the message is passed through.
    #[error("{0}")]
    Store(String),

    /// An argument could not be used as given.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ChaincodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ArgumentCount { .. } => ErrorKind::ArgumentCount,
            Self::UnknownFunction(_) => ErrorKind::UnknownFunction,
            Self::UnsupportedOperation(_) => ErrorKind::UnsupportedOperation,
            Self::Store(_) => ErrorKind::Store,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}

/// Convenience result type for handlers.
pub type ChaincodeResult<T> = core::result::Result<T, ChaincodeError>;
