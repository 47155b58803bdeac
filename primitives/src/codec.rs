//! Record codec: flat ledger values to and from response payloads.
//!
//! Formats:
//! - `TradeDate`: `YYYY-MM-DD HH:MM:SS +0000 UTC`, second precision,
//!   independent of locale
//! - `Counter`: unsigned decimal string
//! - `queryTrade` payload: values joined with a single `,`, no trailing comma
//! - `getTradeHistory` payload: JSON array of `{"writeId", "value"}` objects,
//!   oldest first

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ChaincodeError;

/// Separator between fields of a `queryTrade` payload.
pub const QUERY_FIELD_SEPARATOR: char = ',';

/// Format a timestamp as a `TradeDate` value.
pub fn format_trade_date(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S %z UTC").to_string()
}

/// Parse a stored counter. Absent, non-UTF-8, negative, padded, or
/// otherwise unparseable values all read as zero.
pub fn parse_counter(raw: Option<&[u8]>) -> u64 {
    raw.and_then(|bytes| core::str::from_utf8(bytes).ok())
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0)
}

pub fn encode_counter(value: u64) -> Vec<u8> {
    value.to_string().into_bytes()
}

/// Join read values into a `queryTrade` payload. Absent values become
/// empty fields; bytes are decoded as lossy UTF-8.
pub fn encode_query_response<I, V>(values: I) -> Vec<u8>
where
    I: IntoIterator<Item = Option<V>>,
    V: AsRef<[u8]>,
{
    let fields: Vec<String> = values
        .into_iter()
        .map(|v| {
            v.map(|bytes| String::from_utf8_lossy(bytes.as_ref()).into_owned())
                .unwrap_or_default()
        })
        .collect();
    fields.join(&QUERY_FIELD_SEPARATOR.to_string()).into_bytes()
}

/// Split a `queryTrade` payload back into its fields.
///
/// Values that themselves contain a comma cannot be recovered; the format
/// has no escaping.
pub fn decode_query_response(payload: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(payload)
        .split(QUERY_FIELD_SEPARATOR)
        .map(str::to_owned)
        .collect()
}

/// One element of a `getTradeHistory` payload.
///
/// `value` is decoded as lossy UTF-8: invalid sequences become U+FFFD, so
/// a version holding arbitrary bytes cannot be recovered exactly from the
/// payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Identifier of the transaction that produced this version.
    #[serde(rename = "writeId")]
    pub write_id: String,
    /// Value at that version.
    pub value: String,
}

impl HistoryRecord {
    pub fn new(write_id: impl Into<String>, value: &[u8]) -> Self {
        Self {
            write_id: write_id.into(),
            value: String::from_utf8_lossy(value).into_owned(),
        }
    }
}

/// Serialize history records as a JSON array, preserving order.
pub fn encode_history(records: &[HistoryRecord]) -> Result<Vec<u8>, ChaincodeError> {
    serde_json::to_vec(records)
        .map_err(|e| ChaincodeError::InvalidArgument(format!("history encoding failed: {e}")))
}

/// Parse a `getTradeHistory` payload.
pub fn decode_history(payload: &[u8]) -> Result<Vec<HistoryRecord>, ChaincodeError> {
    serde_json::from_slice(payload)
        .map_err(|e| ChaincodeError::InvalidArgument(format!("malformed history payload: {e}")))
}
