//! The contract every write function follows.

use enskit_contracts::ChainContracts;
use enskit_core::error::Result;
use enskit_core::types::SimpleTransactionRequest;

/// A state-changing ENS operation. Building the transaction is pure and
/// never touches the network; sending is left to the wallet client.
pub trait EnsWriteFunction {
    /// Inputs to the operation.
    type Params;

    /// Builds the transaction, validating the parameters against the name
    /// type and the target contract.
    fn make_function_data(
        contracts: &ChainContracts,
        params: &Self::Params,
    ) -> Result<SimpleTransactionRequest>;
}
