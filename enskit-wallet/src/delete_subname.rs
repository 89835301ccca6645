//! Subname deletion.

use alloy::sol_types::SolCall;

use enskit_contracts::{ChainContracts, ContractName, EnsRegistry, NameWrapper};
use enskit_core::constants::EMPTY_ADDRESS;
use enskit_core::error::{EnsError, Result};
use enskit_core::types::{ContractType, NameType, SimpleTransactionRequest};
use enskit_core::{get_name_type, make_label_node_and_parent, namehash};

use crate::function::EnsWriteFunction;

/// Parameters for [`DeleteSubname`].
#[derive(Clone, Debug)]
pub struct DeleteSubnameParams {
    /// Subname to delete
    pub name: String,
    /// Contract holding the subname
    pub contract: ContractType,
    /// Delete as the owner of the subname itself rather than of the
    /// parent (NameWrapper only)
    pub as_owner: bool,
}

/// Deletes a subname by clearing its owner, resolver and TTL.
pub struct DeleteSubname;

impl EnsWriteFunction for DeleteSubname {
    type Params = DeleteSubnameParams;

    fn make_function_data(
        contracts: &ChainContracts,
        params: &Self::Params,
    ) -> Result<SimpleTransactionRequest> {
        let name_type = get_name_type(&params.name);
        if !name_type.is_subname() {
            return Err(EnsError::unsupported_name_type(
                name_type,
                &[NameType::EthSubname, NameType::OtherSubname],
                "Cannot delete a name that is not a subname",
            ));
        }

        match params.contract {
            ContractType::Registry => {
                if params.as_owner {
                    return Err(EnsError::additional_parameter(
                        "asOwner",
                        &["name", "contract"],
                        "Deleting a subname as the name owner is not supported for the registry contract",
                    ));
                }

                let parts = make_label_node_and_parent(&params.name);
                let call = EnsRegistry::setSubnodeRecordCall {
                    node: parts.parent_node,
                    label: parts.labelhash,
                    owner: EMPTY_ADDRESS,
                    resolver: EMPTY_ADDRESS,
                    ttl: 0,
                };
                Ok(SimpleTransactionRequest::new(
                    contracts.address(ContractName::EnsRegistry)?,
                    call.abi_encode(),
                ))
            }
            ContractType::NameWrapper => {
                let to = contracts.address(ContractName::EnsNameWrapper)?;

                let data = if params.as_owner {
                    NameWrapper::setRecordCall {
                        node: namehash(&params.name),
                        owner: EMPTY_ADDRESS,
                        resolver: EMPTY_ADDRESS,
                        ttl: 0,
                    }
                    .abi_encode()
                } else {
                    let parts = make_label_node_and_parent(&params.name);
                    NameWrapper::setSubnodeRecordCall {
                        parentNode: parts.parent_node,
                        label: parts.label,
                        owner: EMPTY_ADDRESS,
                        resolver: EMPTY_ADDRESS,
                        ttl: 0,
                        fuses: 0,
                        expiry: 0,
                    }
                    .abi_encode()
                };

                Ok(SimpleTransactionRequest::new(to, data))
            }
        }
    }
}
