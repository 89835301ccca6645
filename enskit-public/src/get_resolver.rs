//! Resolver lookup.

use alloy::primitives::{Address, Bytes};
use alloy::sol_types::SolCall;

use enskit_contracts::{ChainContracts, ContractName, UniversalResolver};
use enskit_core::error::Result;
use enskit_core::packet_to_bytes;
use enskit_core::types::SimpleTransactionRequest;

use crate::function::EnsReadFunction;
use crate::universal::universal_revert_to_none;

/// Parameters for [`GetResolver`].
#[derive(Clone, Debug)]
pub struct GetResolverParams {
    /// Name to find the resolver for
    pub name: String,
}

/// Finds the resolver responsible for a name, following wildcard parents.
pub struct GetResolver;

impl EnsReadFunction for GetResolver {
    type Params = GetResolverParams;
    type Output = Option<Address>;

    fn encode(contracts: &ChainContracts, params: &Self::Params) -> Result<SimpleTransactionRequest> {
        let call = UniversalResolver::findResolverCall {
            name: Bytes::from(packet_to_bytes(&params.name)),
        };
        Ok(SimpleTransactionRequest::new(
            contracts.address(ContractName::EnsUniversalResolver)?,
            call.abi_encode(),
        ))
    }

    fn decode(_: &ChainContracts, data: &[u8], _: &Self::Params) -> Result<Self::Output> {
        if data.is_empty() {
            return Ok(None);
        }
        let resolver = UniversalResolver::findResolverCall::abi_decode_returns(data, true)?._0;
        Ok((resolver != Address::ZERO).then_some(resolver))
    }

    fn decode_revert(revert_data: Vec<u8>, _: &Self::Params) -> Result<Self::Output> {
        universal_revert_to_none(revert_data)
    }
}
