//! `addNewTrade`: record one trade and bump the write counter.
//!
//! Write order:
//!
//! 1. `TransactionId` ← freshly generated identifier
//! 2. `TradeDate` ← transaction timestamp
//! 3. first caller entry (key `args[0]`, value `args[1]`)
//! 4. second caller entry (key `args[2]`, value `args[3]`)
//! 5. `Counter` ← previous counter + 1
//!
//! The five writes are independent. Whether a failure at step k leaves
//! steps 1..k-1 behind depends on the stub's write mode.

use tradeledger_primitives::{
    codec::{encode_counter, format_trade_date, parse_counter},
    crypto::generate_transaction_id,
    ChaincodeResult, COUNTER_KEY, TRADE_DATE_KEY, TRANSACTION_ID_KEY,
};

use crate::config::EngineConfig;
use crate::mapping::FieldMapping;
use crate::stub::ChaincodeStub;
use crate::validation::{expect_exact, validate_key};

pub const FUNCTION: &str = "addNewTrade";

pub fn add_trade(
    stub: &mut ChaincodeStub<'_>,
    mapping: &dyn FieldMapping,
    config: &EngineConfig,
    args: &[String],
) -> ChaincodeResult<Vec<u8>> {
    expect_exact(FUNCTION, args, 4)?;
    let entries = mapping.trade_writes(args)?;
    if config.validate_keys {
        for entry in &entries {
            validate_key(&entry.key)?;
        }
    }

    let transaction_id = generate_transaction_id();
    let trade_date = format_trade_date(&stub.tx_context().timestamp);

    stub.put_state(TRANSACTION_ID_KEY, transaction_id.as_bytes())?;
    stub.put_state(TRADE_DATE_KEY, trade_date.as_bytes())?;
    for entry in &entries {
        stub.put_state(&entry.key, entry.value.as_bytes())?;
    }

    let previous = parse_counter(stub.get_state(COUNTER_KEY)?.as_deref());
    let counter = previous.saturating_add(1);
    stub.put_state(COUNTER_KEY, &encode_counter(counter))?;

    tracing::info!(
        tx_id = stub.tx_id(),
        transaction_id = %transaction_id,
        counter,
        "added new trade"
    );
    Ok(Vec::new())
}
