//! Owner lookup on the Registry or NameWrapper.

use alloy::primitives::{Address, U256};
use alloy::sol_types::SolCall;

use enskit_contracts::{ChainContracts, ContractName, EnsRegistry, NameWrapper};
use enskit_core::error::Result;
use enskit_core::namehash;
use enskit_core::types::{ContractType, SimpleTransactionRequest};

use crate::function::EnsReadFunction;

/// Parameters for [`GetOwner`].
#[derive(Clone, Debug)]
pub struct GetOwnerParams {
    /// Name to read the owner of
    pub name: String,
    /// Where ownership is recorded
    pub contract: ContractType,
}

/// Reads the owner of a name from the Registry (`owner(node)`) or the
/// NameWrapper (`ownerOf(uint256(node))`).
pub struct GetOwner;

impl EnsReadFunction for GetOwner {
    type Params = GetOwnerParams;
    type Output = Option<Address>;

    fn encode(contracts: &ChainContracts, params: &Self::Params) -> Result<SimpleTransactionRequest> {
        let node = namehash(&params.name);
        let request = match params.contract {
            ContractType::Registry => SimpleTransactionRequest::new(
                contracts.address(ContractName::EnsRegistry)?,
                EnsRegistry::ownerCall { node }.abi_encode(),
            ),
            ContractType::NameWrapper => SimpleTransactionRequest::new(
                contracts.address(ContractName::EnsNameWrapper)?,
                NameWrapper::ownerOfCall {
                    id: U256::from_be_bytes(node.0),
                }
                .abi_encode(),
            ),
        };
        Ok(request)
    }

    fn decode(_: &ChainContracts, data: &[u8], params: &Self::Params) -> Result<Self::Output> {
        if data.is_empty() {
            return Ok(None);
        }
        let owner = match params.contract {
            ContractType::Registry => EnsRegistry::ownerCall::abi_decode_returns(data, true)?._0,
            ContractType::NameWrapper => {
                NameWrapper::ownerOfCall::abi_decode_returns(data, true)?.owner
            }
        };
        Ok((owner != Address::ZERO).then_some(owner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_owner() {
        let contracts = ChainContracts::for_chain(1).unwrap();
        let params = GetOwnerParams {
            name: "alice.eth".into(),
            contract: ContractType::Registry,
        };

        let request = GetOwner::encode(&contracts, &params).unwrap();
        assert_eq!(request.to, contracts.address(ContractName::EnsRegistry).unwrap());
        let call = EnsRegistry::ownerCall::abi_decode(&request.data, true).unwrap();
        assert_eq!(call.node, namehash("alice.eth"));

        let owner = Address::repeat_byte(5);
        let data = EnsRegistry::ownerCall::abi_encode_returns(&(owner,));
        assert_eq!(GetOwner::decode(&contracts, &data, &params).unwrap(), Some(owner));
    }

    #[test]
    fn test_name_wrapper_owner_uses_token_id() {
        let contracts = ChainContracts::for_chain(1).unwrap();
        let params = GetOwnerParams {
            name: "alice.eth".into(),
            contract: ContractType::NameWrapper,
        };

        let request = GetOwner::encode(&contracts, &params).unwrap();
        assert_eq!(request.to, contracts.address(ContractName::EnsNameWrapper).unwrap());
        let call = NameWrapper::ownerOfCall::abi_decode(&request.data, true).unwrap();
        assert_eq!(call.id.to_be_bytes::<32>(), namehash("alice.eth").0);

        let zero = NameWrapper::ownerOfCall::abi_encode_returns(&(Address::ZERO,));
        assert_eq!(GetOwner::decode(&contracts, &zero, &params).unwrap(), None);
    }
}
