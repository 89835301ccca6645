//! The encode/decode contract every read function follows.

use enskit_contracts::ChainContracts;
use enskit_core::error::{EnsError, Result};
use enskit_core::types::SimpleTransactionRequest;

/// A read-only ENS query expressed as a pure encode step and a pure decode
/// step, so it can be driven by any transport (or batched by a caller).
pub trait EnsReadFunction {
    /// Inputs to the query.
    type Params;
    /// Typed result.
    type Output;

    /// Builds the `eth_call` request.
    fn encode(contracts: &ChainContracts, params: &Self::Params) -> Result<SimpleTransactionRequest>;

    /// Parses the data returned by the call.
    fn decode(contracts: &ChainContracts, data: &[u8], params: &Self::Params)
        -> Result<Self::Output>;

    /// Handles a reverted call. Reverts are errors unless the function says
    /// otherwise.
    fn decode_revert(revert_data: Vec<u8>, _params: &Self::Params) -> Result<Self::Output> {
        Err(EnsError::ContractReverted { data: revert_data })
    }
}
