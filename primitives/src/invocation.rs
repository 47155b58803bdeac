//! Invocation boundary types: transaction context, invocation, and response.
//!
//! The peer delivers each transaction as a function name plus positional
//! string arguments. The engine answers with a [`Response`]: either a
//! success payload (opaque bytes) or a structured failure.

use chrono::{DateTime, TimeZone, Utc};

use crate::crypto::compute_tx_id;
use crate::error::{ChaincodeError, ErrorKind};

/// Per-transaction context supplied by the peer.
///
/// Carries only identity and time. No state lives here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxContext {
    /// Identifier of the transaction being executed. Stores attribute
    /// every write of this invocation to it.
    pub tx_id: String,
    /// Channel the transaction was submitted on.
    pub channel_id: String,
    /// Transaction timestamp, truncated to whole seconds.
    pub timestamp: DateTime<Utc>,
}

impl TxContext {
    /// Create a context stamped with the current wall-clock time.
    pub fn new(tx_id: impl Into<String>) -> Self {
        Self {
            tx_id: tx_id.into(),
            channel_id: String::new(),
            timestamp: truncate_to_seconds(Utc::now()),
        }
    }

    /// Replace the timestamp with a fixed Unix time (seconds).
    ///
    /// Out-of-range values leave the timestamp untouched.
    pub fn at_unix(mut self, secs: i64) -> Self {
        if let Some(ts) = Utc.timestamp_opt(secs, 0).single() {
            self.timestamp = ts;
        }
        self
    }

    /// Create a context for a signed proposal. The id is derived from the
    /// proposal nonce and creator identity with [`compute_tx_id`].
    pub fn for_proposal(nonce: &[u8], creator: &[u8], channel_id: impl Into<String>) -> Self {
        Self::new(compute_tx_id(nonce, creator)).with_channel(channel_id)
    }

    pub fn with_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }
}

fn truncate_to_seconds(ts: DateTime<Utc>) -> DateTime<Utc> {
    Utc.timestamp_opt(ts.timestamp(), 0).single().unwrap_or(ts)
}

/// A function name plus its ordered positional arguments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    pub function: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Split raw invocation arguments into function name and parameters.
    ///
    /// The first argument names the function; the rest are parameters.
    /// No arguments at all yields an empty function name. Arguments must
    /// be valid UTF-8.
    pub fn from_raw_args(raw: &[Vec<u8>]) -> Result<Self, ChaincodeError> {
        let mut decoded = Vec::with_capacity(raw.len());
        for (idx, arg) in raw.iter().enumerate() {
            let s = core::str::from_utf8(arg).map_err(|e| {
                ChaincodeError::InvalidArgument(format!("argument {idx} is not UTF-8: {e}"))
            })?;
            decoded.push(s.to_owned());
        }
        let mut iter = decoded.into_iter();
        let function = iter.next().unwrap_or_default();
        Ok(Self {
            function,
            args: iter.collect(),
        })
    }
}

/// Response status codes, matching the peer's conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Status {
    Ok = 200,
    Error = 500,
}

impl Status {
    pub fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Outcome of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: Status,
    /// Human-readable failure message; empty on success.
    pub message: String,
    /// Success payload; empty on failure.
    pub payload: Vec<u8>,
    /// Classification of the failure, if any.
    pub error_kind: Option<ErrorKind>,
}

impl Response {
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: Status::Ok,
            message: String::new(),
            payload,
            error_kind: None,
        }
    }

    pub fn error(err: &ChaincodeError) -> Self {
        Self {
            status: Status::Error,
            message: err.to_string(),
            payload: Vec::new(),
            error_kind: Some(err.kind()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }
}

impl From<Result<Vec<u8>, ChaincodeError>> for Response {
    fn from(result: Result<Vec<u8>, ChaincodeError>) -> Self {
        match result {
            Ok(payload) => Self::success(payload),
            Err(err) => Self::error(&err),
        }
    }
}
