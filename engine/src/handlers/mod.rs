//! Transaction handlers.
//!
//! Each handler validates its arguments before touching the store, then
//! performs a fixed sequence of reads and writes through the stub and
//! returns the success payload. The first failure aborts the handler.

pub mod add_trade;
pub mod query_trade;
pub mod trade_history;

pub use add_trade::add_trade;
pub use query_trade::query_trade;
pub use trade_history::get_trade_history;
