//! First step of a `.eth` registration.

use alloy::sol_types::SolCall;

use enskit_contracts::{ChainContracts, ContractName, EthRegistrarController};
use enskit_core::error::{EnsError, Result};
use enskit_core::get_name_type;
use enskit_core::types::{NameType, SimpleTransactionRequest};

use crate::function::EnsWriteFunction;
use crate::register::{make_commitment, RegistrationParameters};

/// Sends the registration commitment to the ETHRegistrarController.
pub struct CommitName;

impl EnsWriteFunction for CommitName {
    type Params = RegistrationParameters;

    fn make_function_data(
        contracts: &ChainContracts,
        params: &Self::Params,
    ) -> Result<SimpleTransactionRequest> {
        let name_type = get_name_type(&params.name);
        if name_type != NameType::Eth2ld {
            return Err(EnsError::unsupported_name_type(
                name_type,
                &[NameType::Eth2ld],
                "Only 2ld-eth name registration is supported",
            ));
        }

        let call = EthRegistrarController::commitCall {
            commitment: make_commitment(params)?,
        };
        Ok(SimpleTransactionRequest::new(
            contracts.address(ContractName::EnsEthRegistrarController)?,
            call.abi_encode(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Address, B256};

    fn params(name: &str) -> RegistrationParameters {
        RegistrationParameters {
            name: name.into(),
            owner: Address::repeat_byte(0x11),
            duration: 31_536_000,
            secret: B256::repeat_byte(0xaa),
            resolver_address: None,
            records: None,
            reverse_record: false,
            fuses: None,
        }
    }

    #[test]
    fn test_commit() {
        let contracts = ChainContracts::for_chain(1).unwrap();
        let p = params("test.eth");
        let request = CommitName::make_function_data(&contracts, &p).unwrap();

        assert_eq!(
            request.to,
            contracts.address(ContractName::EnsEthRegistrarController).unwrap()
        );
        let call = EthRegistrarController::commitCall::abi_decode(&request.data, true).unwrap();
        assert_eq!(call.commitment, make_commitment(&p).unwrap());
    }

    #[test]
    fn test_rejects_other_name_types() {
        let contracts = ChainContracts::for_chain(1).unwrap();
        for name in ["eth", "sub.test.eth", "test.com"] {
            let err = CommitName::make_function_data(&contracts, &params(name)).unwrap_err();
            assert!(matches!(
                err,
                EnsError::UnsupportedNameType {
                    supported, ..
                } if supported == vec![NameType::Eth2ld]
            ));
        }
    }
}
