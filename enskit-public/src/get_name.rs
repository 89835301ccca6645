//! Primary name (reverse record) lookup.

use alloy::primitives::{Address, Bytes};
use alloy::sol_types::SolCall;
use serde::Serialize;

use enskit_contracts::{ChainContracts, ContractName, UniversalResolver};
use enskit_core::constants::REVERSE_SUFFIX;
use enskit_core::error::Result;
use enskit_core::packet_to_bytes;
use enskit_core::types::SimpleTransactionRequest;

use crate::function::EnsReadFunction;
use crate::universal::universal_revert_to_none;

/// Parameters for [`GetName`].
#[derive(Clone, Debug)]
pub struct GetNameParams {
    /// Address to look up the primary name of
    pub address: Address,
}

/// Primary name of an address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameResult {
    /// The reverse record
    pub name: String,
    /// Whether the name resolves forward to the queried address
    #[serde(rename = "match")]
    pub is_match: bool,
    /// Resolver holding the reverse record
    pub reverse_resolver_address: Address,
    /// Resolver holding the forward record
    pub resolver_address: Address,
}

/// Reverse node for an address: `<lowercase hex>.addr.reverse`.
pub fn reverse_name(address: Address) -> String {
    format!("{}.{}", hex::encode(address), REVERSE_SUFFIX)
}

/// Looks up the primary name of an address and checks it resolves back.
pub struct GetName;

impl EnsReadFunction for GetName {
    type Params = GetNameParams;
    type Output = Option<NameResult>;

    fn encode(contracts: &ChainContracts, params: &Self::Params) -> Result<SimpleTransactionRequest> {
        let call = UniversalResolver::reverseCall {
            reverseName: Bytes::from(packet_to_bytes(&reverse_name(params.address))),
        };
        Ok(SimpleTransactionRequest::new(
            contracts.address(ContractName::EnsUniversalResolver)?,
            call.abi_encode(),
        ))
    }

    fn decode(_: &ChainContracts, data: &[u8], params: &Self::Params) -> Result<Self::Output> {
        if data.is_empty() {
            return Ok(None);
        }

        let decoded = UniversalResolver::reverseCall::abi_decode_returns(data, true)?;
        if decoded.resolvedName.is_empty() {
            return Ok(None);
        }

        Ok(Some(NameResult {
            name: decoded.resolvedName,
            is_match: decoded.resolvedAddress == params.address,
            reverse_resolver_address: decoded.reverseResolver,
            resolver_address: decoded.resolver,
        }))
    }

    fn decode_revert(revert_data: Vec<u8>, _: &Self::Params) -> Result<Self::Output> {
        universal_revert_to_none(revert_data)
    }
}
