//! Read client.

use alloy::primitives::{Address, B256};
use tracing::{debug, instrument};

use enskit_contracts::ChainContracts;
use enskit_core::error::{EnsError, Result};
use enskit_core::normalize;
use enskit_core::traits::RpcTransport;
use enskit_core::types::{ContractType, DecodedAbi};

use crate::function::EnsReadFunction;
use crate::get_abi::{GetAbiRecord, GetAbiRecordParams};
use crate::get_commitment::{GetCommitmentParams, GetCommitmentTimestamp};
use crate::get_fuses::{FusesResult, GetFuses, GetFusesParams};
use crate::get_name::{GetName, GetNameParams, NameResult};
use crate::get_owner::{GetOwner, GetOwnerParams};
use crate::get_resolver::{GetResolver, GetResolverParams};

/// Runs read functions against an [`RpcTransport`].
pub struct EnsPublicClient<T> {
    transport: T,
    contracts: ChainContracts,
}

impl<T: RpcTransport> EnsPublicClient<T> {
    /// Creates a client using an explicit contract table.
    pub fn new(transport: T, contracts: ChainContracts) -> Self {
        Self {
            transport,
            contracts,
        }
    }

    /// Creates a client for whatever chain the transport is connected to.
    pub async fn connect(transport: T) -> Result<Self> {
        let chain_id = transport.chain_id().await?;
        debug!(chain_id, "Connecting public client");
        let contracts = ChainContracts::for_chain(chain_id)?;
        Ok(Self::new(transport, contracts))
    }

    /// Contract addresses in use.
    pub fn contracts(&self) -> &ChainContracts {
        &self.contracts
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Encodes, calls and decodes one read function.
    pub async fn call<F: EnsReadFunction>(&self, params: &F::Params) -> Result<F::Output> {
        let request = F::encode(&self.contracts, params)?;

        match self.transport.call(&request).await {
            Ok(data) => F::decode(&self.contracts, &data, params),
            Err(EnsError::ContractReverted { data }) => F::decode_revert(data, params),
            Err(e) => Err(e),
        }
    }

    /// ABI record of `name`, or `None` if it has none.
    #[instrument(skip(self))]
    pub async fn get_abi_record(&self, name: &str) -> Result<Option<DecodedAbi>> {
        let params = GetAbiRecordParams {
            name: normalize(name)?,
        };
        self.call::<GetAbiRecord>(&params).await
    }

    /// Fuses of a wrapped name, or `None` if they cannot be read.
    #[instrument(skip(self))]
    pub async fn get_fuses(&self, name: &str) -> Result<Option<FusesResult>> {
        let params = GetFusesParams {
            name: normalize(name)?,
        };
        self.call::<GetFuses>(&params).await
    }

    /// Resolver for `name`, or `None` if none is set.
    #[instrument(skip(self))]
    pub async fn get_resolver(&self, name: &str) -> Result<Option<Address>> {
        let params = GetResolverParams {
            name: normalize(name)?,
        };
        self.call::<GetResolver>(&params).await
    }

    /// Primary name of `address`, or `None` if it has none.
    #[instrument(skip(self))]
    pub async fn get_name(&self, address: Address) -> Result<Option<NameResult>> {
        self.call::<GetName>(&GetNameParams { address }).await
    }

    /// Owner of `name` on the given contract, or `None` if unowned.
    #[instrument(skip(self))]
    pub async fn get_owner(&self, name: &str, contract: ContractType) -> Result<Option<Address>> {
        let params = GetOwnerParams {
            name: normalize(name)?,
            contract,
        };
        self.call::<GetOwner>(&params).await
    }

    /// Time a registration commitment was made, or `None` if unknown.
    #[instrument(skip(self))]
    pub async fn get_commitment_timestamp(&self, commitment: B256) -> Result<Option<u64>> {
        self.call::<GetCommitmentTimestamp>(&GetCommitmentParams { commitment })
            .await
    }
}
