//! NameWrapper fuse lookup.

use std::collections::BTreeMap;

use alloy::primitives::B256;
use alloy::sol_types::SolCall;
use serde::Serialize;
use tracing::debug;

use enskit_contracts::{ChainContracts, ContractName, NameWrapper};
use enskit_core::error::Result;
use enskit_core::namehash;
use enskit_core::types::{Fuses, SimpleTransactionRequest, Vulnerability};

use crate::function::EnsReadFunction;

/// Parameters for [`GetFuses`].
#[derive(Clone, Debug)]
pub struct GetFusesParams {
    /// Wrapped name
    pub name: String,
}

/// Fuses burned on a wrapped name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FusesResult {
    /// Raw fuse bits
    pub raw: Fuses,
    /// Every named fuse mapped to whether it is burned
    pub fuses: BTreeMap<&'static str, bool>,
    /// True when no fuse is burned
    pub can_do_everything: bool,
    /// Why the name is not safe, if it is not
    pub vulnerability: Vulnerability,
    /// The node the vulnerability applies to
    pub vulnerable_node: B256,
}

impl FusesResult {
    /// Expands raw fuse bits into the named flags.
    pub fn new(raw: Fuses, vulnerability: Vulnerability, vulnerable_node: B256) -> Self {
        let fuses = Fuses::NAMED
            .iter()
            .map(|(name, fuse)| (*name, raw.contains(*fuse)))
            .collect();

        Self {
            raw,
            fuses,
            can_do_everything: raw.is_empty(),
            vulnerability,
            vulnerable_node,
        }
    }

    /// Whether the fuse called `name` (camelCase) is burned.
    pub fn is_burned(&self, name: &str) -> bool {
        self.fuses.get(name).copied().unwrap_or(false)
    }
}

/// Reads the fuses of a wrapped name from the NameWrapper.
pub struct GetFuses;

impl EnsReadFunction for GetFuses {
    type Params = GetFusesParams;
    type Output = Option<FusesResult>;

    fn encode(contracts: &ChainContracts, params: &Self::Params) -> Result<SimpleTransactionRequest> {
        let call = NameWrapper::getFusesCall {
            node: namehash(&params.name),
        };
        Ok(SimpleTransactionRequest::new(
            contracts.address(ContractName::EnsNameWrapper)?,
            call.abi_encode(),
        ))
    }

    /// Undecodable data (e.g. an unwrapped name on an older wrapper) yields
    /// `None` rather than an error.
    fn decode(_: &ChainContracts, data: &[u8], params: &Self::Params) -> Result<Self::Output> {
        let decoded = match NameWrapper::getFusesCall::abi_decode_returns(data, true) {
            Ok(decoded) => decoded,
            Err(e) => {
                debug!(name = %params.name, error = %e, "getFuses result did not decode");
                return Ok(None);
            }
        };

        let vulnerability = match Vulnerability::try_from(decoded.vulnerability) {
            Ok(v) => v,
            Err(e) => {
                debug!(name = %params.name, error = %e, "unknown vulnerability");
                return Ok(None);
            }
        };

        Ok(Some(FusesResult::new(
            Fuses(decoded.fuses),
            vulnerability,
            decoded.vulnerableNode,
        )))
    }
}
