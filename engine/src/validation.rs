//! Argument validation.
//!
//! Every check here runs before the handler touches the store, so a
//! rejected invocation performs no reads and no writes.

use tradeledger_primitives::{ChaincodeError, ChaincodeResult};

/// Require exactly `n` positional arguments.
pub fn expect_exact(function: &'static str, args: &[String], n: usize) -> ChaincodeResult<()> {
    if args.len() != n {
        return Err(ChaincodeError::ArgumentCount {
            function,
            expected: n.to_string(),
            got: args.len(),
        });
    }
    Ok(())
}

/// Require at least `n` positional arguments.
pub fn expect_at_least(function: &'static str, args: &[String], n: usize) -> ChaincodeResult<()> {
    if args.len() < n {
        return Err(ChaincodeError::ArgumentCount {
            function,
            expected: format!("at least {n}"),
            got: args.len(),
        });
    }
    Ok(())
}

/// Reject keys the ledger would refuse.
pub fn validate_key(key: &str) -> ChaincodeResult<()> {
    if key.is_empty() {
        return Err(ChaincodeError::InvalidArgument(
            "key must not be an empty string".into(),
        ));
    }
    Ok(())
}
