//! Name classification and contract selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EnsError;

/// Position of a name in the ENS hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NameType {
    /// The empty root name.
    #[serde(rename = "root")]
    Root,
    /// `eth` itself.
    #[serde(rename = "eth-tld")]
    EthTld,
    /// Any other top-level name.
    #[serde(rename = "tld")]
    Tld,
    /// `<label>.eth`
    #[serde(rename = "eth-2ld")]
    Eth2ld,
    /// `<label>.<tld>` for a non-eth tld.
    #[serde(rename = "other-2ld")]
    Other2ld,
    /// Anything deeper under `eth`.
    #[serde(rename = "eth-subname")]
    EthSubname,
    /// Anything deeper under another tld.
    #[serde(rename = "other-subname")]
    OtherSubname,
}

impl NameType {
    /// Kebab-case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            NameType::Root => "root",
            NameType::EthTld => "eth-tld",
            NameType::Tld => "tld",
            NameType::Eth2ld => "eth-2ld",
            NameType::Other2ld => "other-2ld",
            NameType::EthSubname => "eth-subname",
            NameType::OtherSubname => "other-subname",
        }
    }

    /// True for names with at least three labels.
    pub fn is_subname(&self) -> bool {
        matches!(self, NameType::EthSubname | NameType::OtherSubname)
    }
}

impl fmt::Display for NameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contract that owns the name being modified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContractType {
    /// The ENS registry.
    Registry,
    /// The NameWrapper (ERC-1155 wrapped names).
    NameWrapper,
}

impl ContractType {
    /// Every supported contract selector.
    pub const SUPPORTED: [&'static str; 2] = ["registry", "nameWrapper"];

    /// camelCase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Registry => "registry",
            ContractType::NameWrapper => "nameWrapper",
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractType {
    type Err = EnsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "registry" => Ok(ContractType::Registry),
            "nameWrapper" | "name-wrapper" | "namewrapper" => Ok(ContractType::NameWrapper),
            other => Err(EnsError::InvalidContractType {
                contract_type: other.to_string(),
                supported: Self::SUPPORTED.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}
