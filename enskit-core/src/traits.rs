//! Common traits for enskit.
//!
//! These traits define the seams between the encode/decode functions and
//! whatever carries the calls to a node, so tests can substitute an
//! in-memory transport.

use alloy::primitives::{Address, Bytes, B256};
use async_trait::async_trait;

use crate::error::Result;
use crate::types::SimpleTransactionRequest;

// ═══════════════════════════════════════════════════════════════════════════════
// TRANSPORT TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Interface for talking to an Ethereum node.
///
/// Implementations might use:
/// - JSON-RPC over HTTP (production)
/// - A canned in-memory table (testing/dry runs)
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// Chain the transport is connected to.
    async fn chain_id(&self) -> Result<u64>;

    /// Executes a read-only call at the latest block.
    ///
    /// A revert is reported as [`crate::EnsError::ContractReverted`].
    async fn call(&self, request: &SimpleTransactionRequest) -> Result<Bytes>;

    /// Submits a transaction signed by the node for `from`.
    ///
    /// Returns the transaction hash.
    async fn send_transaction(
        &self,
        request: &SimpleTransactionRequest,
        from: Address,
    ) -> Result<B256>;
}

#[async_trait]
impl<T: RpcTransport + ?Sized> RpcTransport for std::sync::Arc<T> {
    async fn chain_id(&self) -> Result<u64> {
        (**self).chain_id().await
    }

    async fn call(&self, request: &SimpleTransactionRequest) -> Result<Bytes> {
        (**self).call(request).await
    }

    async fn send_transaction(
        &self,
        request: &SimpleTransactionRequest,
        from: Address,
    ) -> Result<B256> {
        (**self).send_transaction(request, from).await
    }
}
