//! Transaction dispatcher: the engine's invocation surface.
//!
//! `TradeChaincode` routes each invocation to one handler and turns the
//! handler's result into a [`Response`]:
//!
//! 1. Resolve the function name (unknown names fail before any store access)
//! 2. Run the handler against the invocation's stub
//! 3. On success, commit the stub's writes; on failure, discard them
//! 4. Report success payload or structured failure
//!
//! The chaincode holds only immutable configuration. All mutable state
//! flows through the `ChaincodeStub` passed into each call, so one
//! instance can serve any number of invocations.

use tradeledger_hostapi::StateStore;
use tradeledger_primitives::{
    ChaincodeError, ChaincodeResult, Invocation, Response, TxContext,
};

use crate::config::EngineConfig;
use crate::handlers::{add_trade, get_trade_history, query_trade};
use crate::mapping::{FieldMapping, PositionalMapping};
use crate::stub::ChaincodeStub;

/// Functions reachable through `invoke`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    AddNewTrade,
    QueryTrade,
    GetTradeHistory,
}

impl Function {
    /// Resolve a function name. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            crate::handlers::add_trade::FUNCTION => Some(Self::AddNewTrade),
            crate::handlers::query_trade::FUNCTION => Some(Self::QueryTrade),
            crate::handlers::trade_history::FUNCTION => Some(Self::GetTradeHistory),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::AddNewTrade => crate::handlers::add_trade::FUNCTION,
            Self::QueryTrade => crate::handlers::query_trade::FUNCTION,
            Self::GetTradeHistory => crate::handlers::trade_history::FUNCTION,
        }
    }
}

impl core::fmt::Display for Function {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// The trade ledger chaincode.
pub struct TradeChaincode {
    config: EngineConfig,
    mapping: Box<dyn FieldMapping>,
}

impl Default for TradeChaincode {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl TradeChaincode {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            mapping: Box::new(PositionalMapping),
        }
    }

    /// Replace the argument-to-key mapping.
    pub fn with_mapping(mut self, mapping: Box<dyn FieldMapping>) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build the stub for one invocation using the configured write mode.
    pub fn stub<'a>(&self, store: &'a mut dyn StateStore, tx: TxContext) -> ChaincodeStub<'a> {
        ChaincodeStub::new(store, tx).with_write_mode(self.config.write_mode)
    }

    /// Deploy-time entry point. Always records a trade, whatever function
    /// name the deploy request carried.
    pub fn init(&self, stub: &mut ChaincodeStub<'_>, args: &[String]) -> Response {
        tracing::info!(
            tx_id = stub.tx_id(),
            channel = %stub.tx_context().channel_id,
            args = args.len(),
            "init"
        );
        self.run(stub, Function::AddNewTrade, args)
    }

    /// Transaction entry point.
    pub fn invoke(&self, stub: &mut ChaincodeStub<'_>, function: &str, args: &[String]) -> Response {
        tracing::info!(
            tx_id = stub.tx_id(),
            channel = %stub.tx_context().channel_id,
            function,
            args = args.len(),
            "invoke"
        );
        match Function::from_name(function) {
            Some(f) => self.run(stub, f, args),
            None => {
                let err = ChaincodeError::UnknownFunction(function.to_owned());
                tracing::warn!(tx_id = stub.tx_id(), function, "invoke did not find function");
                Response::error(&err)
            }
        }
    }

    /// Transaction entry point for raw peer arguments: the first argument
    /// names the function and the rest are its parameters.
    pub fn invoke_raw(&self, stub: &mut ChaincodeStub<'_>, raw_args: &[Vec<u8>]) -> Response {
        match Invocation::from_raw_args(raw_args) {
            Ok(invocation) => self.invoke(stub, &invocation.function, &invocation.args),
            Err(err) => {
                tracing::warn!(tx_id = stub.tx_id(), error = %err, "rejected raw invocation");
                Response::error(&err)
            }
        }
    }

    /// Legacy query entry point. Queries go through `invoke`; this path is
    /// always rejected.
    pub fn query(&self, stub: &mut ChaincodeStub<'_>) -> Response {
        tracing::warn!(tx_id = stub.tx_id(), "query entry point called");
        Response::error(&ChaincodeError::UnsupportedOperation(
            "queries are only served through invoke".into(),
        ))
    }

    fn run(&self, stub: &mut ChaincodeStub<'_>, function: Function, args: &[String]) -> Response {
        let result = self.dispatch(stub, function, args).and_then(|payload| {
            stub.commit()?;
            Ok(payload)
        });
        if let Err(err) = &result {
            stub.discard();
            tracing::warn!(
                tx_id = stub.tx_id(),
                %function,
                kind = %err.kind(),
                error = %err,
                "invocation failed"
            );
        }
        Response::from(result)
    }

    fn dispatch(
        &self,
        stub: &mut ChaincodeStub<'_>,
        function: Function,
        args: &[String],
    ) -> ChaincodeResult<Vec<u8>> {
        match function {
            Function::AddNewTrade => add_trade(stub, self.mapping.as_ref(), &self.config, args),
            Function::QueryTrade => query_trade(stub, self.mapping.as_ref(), args),
            Function::GetTradeHistory => get_trade_history(stub, &self.config, args),
        }
    }
}

impl core::fmt::Debug for TradeChaincode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TradeChaincode")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
