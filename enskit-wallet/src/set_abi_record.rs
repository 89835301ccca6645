//! ABI record updates.

use alloy::primitives::Address;

use enskit_contracts::ChainContracts;
use enskit_core::error::Result;
use enskit_core::namehash;
use enskit_core::types::{EncodedAbi, SimpleTransactionRequest};

use crate::encoders::encode_set_abi;
use crate::function::EnsWriteFunction;

/// Parameters for [`SetAbiRecord`].
#[derive(Clone, Debug)]
pub struct SetAbiRecordParams {
    /// Name to set the record on
    pub name: String,
    /// Payload from [`crate::encode_abi`]; `None` clears the record
    pub encoded_abi: Option<EncodedAbi>,
    /// Resolver the name uses
    pub resolver_address: Address,
}

/// Writes (or clears) the ABI record of a name on its resolver.
pub struct SetAbiRecord;

impl EnsWriteFunction for SetAbiRecord {
    type Params = SetAbiRecordParams;

    fn make_function_data(
        _: &ChainContracts,
        params: &Self::Params,
    ) -> Result<SimpleTransactionRequest> {
        Ok(SimpleTransactionRequest::new(
            params.resolver_address,
            encode_set_abi(namehash(&params.name), params.encoded_abi.as_ref()),
        ))
    }
}
