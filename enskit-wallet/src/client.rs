//! Write client.

use alloy::primitives::{Address, B256};
use tracing::{debug, info, instrument};

use enskit_contracts::ChainContracts;
use enskit_core::error::Result;
use enskit_core::traits::RpcTransport;

use crate::commit_name::CommitName;
use crate::create_subname::{CreateSubname, CreateSubnameParams};
use crate::delete_subname::{DeleteSubname, DeleteSubnameParams};
use crate::function::EnsWriteFunction;
use crate::register::RegistrationParameters;
use crate::set_abi_record::{SetAbiRecord, SetAbiRecordParams};

/// Sends write functions from one account.
///
/// Signing is left to the node (`eth_sendTransaction`), so `account` must be
/// unlocked there.
pub struct EnsWalletClient<T> {
    transport: T,
    contracts: ChainContracts,
    account: Address,
}

impl<T: RpcTransport> EnsWalletClient<T> {
    /// Creates a client using an explicit contract table.
    pub fn new(transport: T, contracts: ChainContracts, account: Address) -> Self {
        Self {
            transport,
            contracts,
            account,
        }
    }

    /// Creates a client for whatever chain the transport is connected to.
    pub async fn connect(transport: T, account: Address) -> Result<Self> {
        let chain_id = transport.chain_id().await?;
        debug!(chain_id, %account, "Connecting wallet client");
        let contracts = ChainContracts::for_chain(chain_id)?;
        Ok(Self::new(transport, contracts, account))
    }

    /// Sending account.
    pub fn account(&self) -> Address {
        self.account
    }

    /// Contract addresses in use.
    pub fn contracts(&self) -> &ChainContracts {
        &self.contracts
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds and sends one write function, returning the transaction hash.
    pub async fn send<F: EnsWriteFunction>(&self, params: &F::Params) -> Result<B256> {
        let request = F::make_function_data(&self.contracts, params)?;
        let hash = self
            .transport
            .send_transaction(&request, self.account)
            .await?;
        info!(to = %request.to, %hash, "Transaction sent");
        Ok(hash)
    }

    /// Deletes a subname.
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn delete_subname(&self, params: &DeleteSubnameParams) -> Result<B256> {
        self.send::<DeleteSubname>(params).await
    }

    /// Creates a subname.
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_subname(&self, params: &CreateSubnameParams) -> Result<B256> {
        self.send::<CreateSubname>(params).await
    }

    /// Commits to registering a `.eth` name.
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn commit_name(&self, params: &RegistrationParameters) -> Result<B256> {
        self.send::<CommitName>(params).await
    }

    /// Sets or clears the ABI record of a name.
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn set_abi_record(&self, params: &SetAbiRecordParams) -> Result<B256> {
        self.send::<SetAbiRecord>(params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use alloy::sol_types::SolCall;
    use enskit_contracts::{ContractName, EthRegistrarController, NameWrapper};
    use enskit_core::error::EnsError;
    use enskit_core::types::ContractType;
    use enskit_rpc::MockTransport;

    use crate::register::make_commitment;

    fn account() -> Address {
        Address::repeat_byte(0x99)
    }

    async fn client() -> (Arc<MockTransport>, EnsWalletClient<Arc<MockTransport>>) {
        let mock = Arc::new(MockTransport::new(1));
        let client = EnsWalletClient::connect(mock.clone(), account()).await.unwrap();
        (mock, client)
    }

    #[tokio::test]
    async fn test_delete_subname_sends_from_account() {
        let (mock, client) = client().await;

        let hash = client
            .delete_subname(&DeleteSubnameParams {
                name: "sub.wrapped.eth".into(),
                contract: ContractType::NameWrapper,
                as_owner: false,
            })
            .await
            .unwrap();

        let sent = mock.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from, account());
        assert_eq!(sent[0].hash, hash);
        assert_eq!(
            sent[0].request.to,
            client.contracts().address(ContractName::EnsNameWrapper).unwrap()
        );
        assert_eq!(
            sent[0].request.selector(),
            Some(NameWrapper::setSubnodeRecordCall::SELECTOR)
        );
    }

    #[tokio::test]
    async fn test_commit_name() {
        let (mock, client) = client().await;
        let params = RegistrationParameters {
            name: "newname.eth".into(),
            owner: account(),
            duration: 31_536_000,
            secret: B256::repeat_byte(1),
            resolver_address: None,
            records: None,
            reverse_record: false,
            fuses: None,
        };

        client.commit_name(&params).await.unwrap();

        let sent = mock.sent();
        let call = EthRegistrarController::commitCall::abi_decode(&sent[0].request.data, true)
            .unwrap();
        assert_eq!(call.commitment, make_commitment(&params).unwrap());
    }

    #[tokio::test]
    async fn test_invalid_params_send_nothing() {
        let (mock, client) = client().await;

        let err = client
            .delete_subname(&DeleteSubnameParams {
                name: "test.eth".into(),
                contract: ContractType::Registry,
                as_owner: false,
            })
            .await
            .unwrap_err();

        assert!(err.is_validation_error());
        assert!(matches!(err, EnsError::UnsupportedNameType { .. }));
        assert!(mock.sent().is_empty());
    }
}
