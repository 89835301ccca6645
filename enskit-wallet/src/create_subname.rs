//! Subname creation.

use alloy::primitives::Address;
use alloy::sol_types::SolCall;

use enskit_contracts::{ChainContracts, ContractName, EnsRegistry, NameWrapper};
use enskit_core::error::{EnsError, Result};
use enskit_core::types::{ContractType, Fuses, NameType, SimpleTransactionRequest};
use enskit_core::{
    expiry_to_u64, get_name_type, make_label_node_and_parent, wrapped_label_length_check, Expiry,
};

use crate::function::EnsWriteFunction;

const REGISTRY_PARAMETERS: [&str; 4] = ["name", "contract", "owner", "resolverAddress"];

/// Parameters for [`CreateSubname`].
#[derive(Clone, Debug)]
pub struct CreateSubnameParams {
    /// Full name of the subname to create
    pub name: String,
    /// Owner of the new subname
    pub owner: Address,
    /// Contract holding the parent
    pub contract: ContractType,
    /// Resolver for the subname; the chain's PublicResolver if unset
    pub resolver_address: Option<Address>,
    /// Expiry of the wrapped subname (NameWrapper only)
    pub expiry: Option<Expiry>,
    /// Fuses to burn on the subname (NameWrapper only)
    pub fuses: Option<Fuses>,
}

/// Creates (or takes over) a subname under a name the sender controls.
pub struct CreateSubname;

impl EnsWriteFunction for CreateSubname {
    type Params = CreateSubnameParams;

    fn make_function_data(
        contracts: &ChainContracts,
        params: &Self::Params,
    ) -> Result<SimpleTransactionRequest> {
        let name_type = get_name_type(&params.name);
        if matches!(name_type, NameType::Root | NameType::EthTld | NameType::Tld) {
            return Err(EnsError::unsupported_name_type(
                name_type,
                &[
                    NameType::Eth2ld,
                    NameType::Other2ld,
                    NameType::EthSubname,
                    NameType::OtherSubname,
                ],
                "Cannot create a subname for a root or top-level name",
            ));
        }

        let resolver = match params.resolver_address {
            Some(resolver) => resolver,
            None => contracts.address(ContractName::EnsPublicResolver)?,
        };
        let parts = make_label_node_and_parent(&params.name);

        match params.contract {
            ContractType::Registry => {
                if params.fuses.is_some() {
                    return Err(EnsError::additional_parameter(
                        "fuses",
                        &REGISTRY_PARAMETERS,
                        "Fuses can only be set on NameWrapper subnames",
                    ));
                }
                if params.expiry.is_some() {
                    return Err(EnsError::additional_parameter(
                        "expiry",
                        &REGISTRY_PARAMETERS,
                        "Expiry can only be set on NameWrapper subnames",
                    ));
                }

                let call = EnsRegistry::setSubnodeRecordCall {
                    node: parts.parent_node,
                    label: parts.labelhash,
                    owner: params.owner,
                    resolver,
                    ttl: 0,
                };
                Ok(SimpleTransactionRequest::new(
                    contracts.address(ContractName::EnsRegistry)?,
                    call.abi_encode(),
                ))
            }
            ContractType::NameWrapper => {
                wrapped_label_length_check(&parts.label)?;

                let fuses = match params.fuses {
                    Some(fuses) => fuses.encode_subname()?,
                    None => 0,
                };
                let expiry = expiry_to_u64(params.expiry.as_ref(), 0)?;

                let call = NameWrapper::setSubnodeRecordCall {
                    parentNode: parts.parent_node,
                    label: parts.label,
                    owner: params.owner,
                    resolver,
                    ttl: 0,
                    fuses,
                    expiry,
                };
                Ok(SimpleTransactionRequest::new(
                    contracts.address(ContractName::EnsNameWrapper)?,
                    call.abi_encode(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enskit_core::{labelhash, namehash};

    fn contracts() -> ChainContracts {
        ChainContracts::for_chain(1).unwrap()
    }

    fn params(name: &str, contract: ContractType) -> CreateSubnameParams {
        CreateSubnameParams {
            name: name.into(),
            owner: Address::repeat_byte(0x0a),
            contract,
            resolver_address: None,
            expiry: None,
            fuses: None,
        }
    }

    #[test]
    fn test_registry_defaults_to_public_resolver() {
        let request =
            CreateSubname::make_function_data(&contracts(), &params("sub.alice.eth", ContractType::Registry))
                .unwrap();

        let call = EnsRegistry::setSubnodeRecordCall::abi_decode(&request.data, true).unwrap();
        assert_eq!(call.node, namehash("alice.eth"));
        assert_eq!(call.label, labelhash("sub"));
        assert_eq!(call.owner, Address::repeat_byte(0x0a));
        assert_eq!(
            call.resolver,
            contracts().address(ContractName::EnsPublicResolver).unwrap()
        );
    }

    #[test]
    fn test_registry_rejects_wrapper_parameters() {
        let mut with_fuses = params("sub.alice.eth", ContractType::Registry);
        with_fuses.fuses = Some(Fuses::CANNOT_UNWRAP);
        assert!(matches!(
            CreateSubname::make_function_data(&contracts(), &with_fuses),
            Err(EnsError::AdditionalParameterSpecified { .. })
        ));

        let mut with_expiry = params("sub.alice.eth", ContractType::Registry);
        with_expiry.expiry = Some(Expiry::Seconds(1));
        assert!(matches!(
            CreateSubname::make_function_data(&contracts(), &with_expiry),
            Err(EnsError::AdditionalParameterSpecified { .. })
        ));
    }

    #[test]
    fn test_name_wrapper_with_fuses_and_expiry() {
        let mut p = params("sub.alice.eth", ContractType::NameWrapper);
        p.resolver_address = Some(Address::repeat_byte(0x0b));
        p.fuses = Some(Fuses::CANNOT_UNWRAP | Fuses::CANNOT_TRANSFER);
        p.expiry = Some(Expiry::Seconds(1_800_000_000));

        let request = CreateSubname::make_function_data(&contracts(), &p).unwrap();
        assert_eq!(request.to, contracts().address(ContractName::EnsNameWrapper).unwrap());

        let call = NameWrapper::setSubnodeRecordCall::abi_decode(&request.data, true).unwrap();
        assert_eq!(call.parentNode, namehash("alice.eth"));
        assert_eq!(call.label, "sub");
        assert_eq!(call.resolver, Address::repeat_byte(0x0b));
        assert_eq!(call.fuses, 5);
        assert_eq!(call.expiry, 1_800_000_000);
    }

    #[test]
    fn test_name_wrapper_emancipates_subname() {
        let mut p = params("sub.alice.eth", ContractType::NameWrapper);
        p.fuses = Some(Fuses::PARENT_CANNOT_CONTROL | Fuses::CANNOT_UNWRAP);

        let request = CreateSubname::make_function_data(&contracts(), &p).unwrap();
        let call = NameWrapper::setSubnodeRecordCall::abi_decode(&request.data, true).unwrap();
        assert_eq!(call.fuses, 0x10000 | 1);
    }

    #[test]
    fn test_name_wrapper_rejects_is_dot_eth() {
        let mut p = params("sub.alice.eth", ContractType::NameWrapper);
        p.fuses = Some(Fuses::IS_DOT_ETH);
        assert!(matches!(
            CreateSubname::make_function_data(&contracts(), &p),
            Err(EnsError::FusesOutOfRange { .. })
        ));
    }

    #[test]
    fn test_name_wrapper_rejects_long_label() {
        let name = format!("{}.alice.eth", "a".repeat(256));
        assert!(matches!(
            CreateSubname::make_function_data(&contracts(), &params(&name, ContractType::NameWrapper)),
            Err(EnsError::WrappedLabelTooLarge { byte_length: 256, .. })
        ));
    }

    #[test]
    fn test_rejects_top_level_names() {
        for name in ["", "eth", "com"] {
            assert!(matches!(
                CreateSubname::make_function_data(&contracts(), &params(name, ContractType::Registry)),
                Err(EnsError::UnsupportedNameType { .. })
            ));
        }
    }
}
