//! ENS deployment addresses per chain.

use std::collections::BTreeMap;
use std::fmt;

use alloy::primitives::{address, Address};
use serde::{Deserialize, Serialize};

use enskit_core::constants::{HOLESKY_CHAIN_ID, MAINNET_CHAIN_ID, SEPOLIA_CHAIN_ID};
use enskit_core::error::{EnsError, Result};

/// The ENS contracts enskit talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContractName {
    EnsRegistry,
    EnsNameWrapper,
    EnsPublicResolver,
    EnsUniversalResolver,
    EnsEthRegistrarController,
    EnsBaseRegistrarImplementation,
    EnsReverseRegistrar,
}

impl ContractName {
    /// camelCase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractName::EnsRegistry => "ensRegistry",
            ContractName::EnsNameWrapper => "ensNameWrapper",
            ContractName::EnsPublicResolver => "ensPublicResolver",
            ContractName::EnsUniversalResolver => "ensUniversalResolver",
            ContractName::EnsEthRegistrarController => "ensEthRegistrarController",
            ContractName::EnsBaseRegistrarImplementation => "ensBaseRegistrarImplementation",
            ContractName::EnsReverseRegistrar => "ensReverseRegistrar",
        }
    }
}

impl fmt::Display for ContractName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contract addresses for one chain.
///
/// Known chains are prefilled; a local dev chain starts empty and is filled
/// with [`ChainContracts::with_address`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainContracts {
    chain_id: u64,
    addresses: BTreeMap<ContractName, Address>,
}

impl ChainContracts {
    /// Addresses of the canonical deployment on `chain_id`.
    pub fn for_chain(chain_id: u64) -> Result<Self> {
        let entries: &[(ContractName, Address)] = match chain_id {
            MAINNET_CHAIN_ID => &MAINNET,
            SEPOLIA_CHAIN_ID => &SEPOLIA,
            HOLESKY_CHAIN_ID => &HOLESKY,
            other => return Err(EnsError::UnsupportedChain(other)),
        };

        Ok(Self {
            chain_id,
            addresses: entries.iter().copied().collect(),
        })
    }

    /// An empty table for a chain with a custom deployment.
    pub fn custom(chain_id: u64) -> Self {
        Self {
            chain_id,
            addresses: BTreeMap::new(),
        }
    }

    /// Sets or overrides one contract address.
    pub fn with_address(mut self, contract: ContractName, address: Address) -> Self {
        self.addresses.insert(contract, address);
        self
    }

    /// Chain these addresses belong to.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Address of `contract`, or [`EnsError::ContractNotFound`].
    pub fn address(&self, contract: ContractName) -> Result<Address> {
        self.addresses
            .get(&contract)
            .copied()
            .ok_or_else(|| EnsError::ContractNotFound {
                chain_id: self.chain_id,
                contract: contract.to_string(),
            })
    }
}

/// Looks up a contract address on a known chain.
pub fn get_chain_contract_address(chain_id: u64, contract: ContractName) -> Result<Address> {
    ChainContracts::for_chain(chain_id)?.address(contract)
}

const MAINNET: [(ContractName, Address); 7] = [
    (ContractName::EnsRegistry, address!("00000000000C2E074eC69A0dFb2997BA6C7d2e1e")),
    (ContractName::EnsNameWrapper, address!("D4416b13d2b3a9aBae7AcD5D6C2BbDBE25686401")),
    (ContractName::EnsPublicResolver, address!("231b0Ee14048e9dCcD1d247744d114a4EB5E8E63")),
    (ContractName::EnsUniversalResolver, address!("ce01f8eee7E479C928F8919abD53E553a36CeF67")),
    (ContractName::EnsEthRegistrarController, address!("253553366Da8546fC250F225fe3d25d0C782303b")),
    (ContractName::EnsBaseRegistrarImplementation, address!("57f1887a8BF19b14fC0dF6Fd9B2acc9Af147eA85")),
    (ContractName::EnsReverseRegistrar, address!("a58E81fe9b61B5c3fE2AFD33CF304c454AbFc7Cb")),
];

const SEPOLIA: [(ContractName, Address); 7] = [
    (ContractName::EnsRegistry, address!("00000000000C2E074eC69A0dFb2997BA6C7d2e1e")),
    (ContractName::EnsNameWrapper, address!("0635513f179D50A207757E05759CbD106d7dFcE8")),
    (ContractName::EnsPublicResolver, address!("8FADE66B79cC9f707aB26799354482EB93a5B7dD")),
    (ContractName::EnsUniversalResolver, address!("c8Af999e38273D658BE1b921b88A9Ddf005769cC")),
    (ContractName::EnsEthRegistrarController, address!("FED6a969AaA60E4961FCD3EBF1A2e8913ac65B72")),
    (ContractName::EnsBaseRegistrarImplementation, address!("57f1887a8BF19b14fC0dF6Fd9B2acc9Af147eA85")),
    (ContractName::EnsReverseRegistrar, address!("A0a1AbcDAe1a2a4A2EF8e9113Ff0e02DD81DC0C6")),
];

const HOLESKY: [(ContractName, Address); 7] = [
    (ContractName::EnsRegistry, address!("00000000000C2E074eC69A0dFb2997BA6C7d2e1e")),
    (ContractName::EnsNameWrapper, address!("ab50971078225D365994dc1Edcb9b7FD72Bb4862")),
    (ContractName::EnsPublicResolver, address!("9010A27463717360cAD99CEA8bD39b8705CCA238")),
    (ContractName::EnsUniversalResolver, address!("a6ac935d4971e3cd133b950ae053becd16fe7f3b")),
    (ContractName::EnsEthRegistrarController, address!("179Be112b24Ad4cFC392eF8924DfA08C20Ad8583")),
    (ContractName::EnsBaseRegistrarImplementation, address!("57f1887a8BF19b14fC0dF6Fd9B2acc9Af147eA85")),
    (ContractName::EnsReverseRegistrar, address!("132AC0B116a73add4225029D1951A9A707Ef673f")),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_registry() {
        let addr = get_chain_contract_address(MAINNET_CHAIN_ID, ContractName::EnsRegistry).unwrap();
        assert_eq!(addr, address!("00000000000C2E074eC69A0dFb2997BA6C7d2e1e"));
    }

    #[test]
    fn test_every_known_chain_is_complete() {
        for chain in [MAINNET_CHAIN_ID, SEPOLIA_CHAIN_ID, HOLESKY_CHAIN_ID] {
            let contracts = ChainContracts::for_chain(chain).unwrap();
            for (name, _) in MAINNET {
                let addr = contracts.address(name).unwrap();
                assert_ne!(addr, Address::ZERO, "{name} on {chain}");
            }
        }
    }

    #[test]
    fn test_unknown_chain() {
        let err = ChainContracts::for_chain(424242).unwrap_err();
        assert!(matches!(err, EnsError::UnsupportedChain(424242)));
    }

    #[test]
    fn test_custom_chain_overrides() {
        let registry = Address::repeat_byte(0x11);
        let contracts = ChainContracts::custom(1337).with_address(ContractName::EnsRegistry, registry);

        assert_eq!(contracts.chain_id(), 1337);
        assert_eq!(contracts.address(ContractName::EnsRegistry).unwrap(), registry);

        let err = contracts.address(ContractName::EnsNameWrapper).unwrap_err();
        match err {
            EnsError::ContractNotFound { chain_id, contract } => {
                assert_eq!(chain_id, 1337);
                assert_eq!(contract, "ensNameWrapper");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
