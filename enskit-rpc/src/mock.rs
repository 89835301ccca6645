//! In-memory transport.
//!
//! Serves canned `eth_call` results keyed by target and calldata and records
//! every transaction it is asked to send. Used for tests and dry runs.

use std::collections::HashMap;

use alloy::primitives::{keccak256, Address, Bytes, B256};
use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use enskit_core::error::{EnsError, Result};
use enskit_core::traits::RpcTransport;
use enskit_core::types::SimpleTransactionRequest;

#[derive(Clone, Debug)]
enum Canned {
    Return(Bytes),
    Revert(Vec<u8>),
}

/// A transaction recorded by [`MockTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentTransaction {
    /// The request as submitted
    pub request: SimpleTransactionRequest,
    /// The sending account
    pub from: Address,
    /// Hash handed back to the caller
    pub hash: B256,
}

/// Transport backed by a lookup table.
///
/// Calls without a registered response return empty data, which is what a
/// node returns for a call to an address without code.
pub struct MockTransport {
    chain_id: u64,
    responses: RwLock<HashMap<(Address, Bytes), Canned>>,
    calls: RwLock<Vec<SimpleTransactionRequest>>,
    sent: RwLock<Vec<SentTransaction>>,
}

impl MockTransport {
    /// Creates an empty transport reporting `chain_id`.
    pub fn new(chain_id: u64) -> Self {
        Self {
            chain_id,
            responses: RwLock::new(HashMap::new()),
            calls: RwLock::new(Vec::new()),
            sent: RwLock::new(Vec::new()),
        }
    }

    /// Registers the return data for a call.
    pub fn on_call(&self, request: &SimpleTransactionRequest, result: impl Into<Bytes>) {
        self.responses.write().insert(
            (request.to, request.data.clone()),
            Canned::Return(result.into()),
        );
    }

    /// Registers a revert with the given payload for a call.
    pub fn on_call_revert(&self, request: &SimpleTransactionRequest, revert_data: Vec<u8>) {
        self.responses
            .write()
            .insert((request.to, request.data.clone()), Canned::Revert(revert_data));
    }

    /// Every read call made so far, in order.
    pub fn calls(&self) -> Vec<SimpleTransactionRequest> {
        self.calls.read().clone()
    }

    /// Every transaction sent so far, in order.
    pub fn sent(&self) -> Vec<SentTransaction> {
        self.sent.read().clone()
    }
}

#[async_trait]
impl RpcTransport for MockTransport {
    async fn chain_id(&self) -> Result<u64> {
        Ok(self.chain_id)
    }

    async fn call(&self, request: &SimpleTransactionRequest) -> Result<Bytes> {
        self.calls.write().push(request.clone());

        let canned = self
            .responses
            .read()
            .get(&(request.to, request.data.clone()))
            .cloned();

        match canned {
            Some(Canned::Return(data)) => Ok(data),
            Some(Canned::Revert(data)) => Err(EnsError::ContractReverted { data }),
            None => {
                debug!(to = %request.to, "No canned response, returning empty data");
                Ok(Bytes::new())
            }
        }
    }

    async fn send_transaction(
        &self,
        request: &SimpleTransactionRequest,
        from: Address,
    ) -> Result<B256> {
        let mut sent = self.sent.write();

        let mut preimage = Vec::with_capacity(request.data.len() + 28);
        preimage.extend_from_slice(from.as_slice());
        preimage.extend_from_slice(&request.data);
        preimage.extend_from_slice(&(sent.len() as u64).to_be_bytes());
        let hash = keccak256(&preimage);

        sent.push(SentTransaction {
            request: request.clone(),
            from,
            hash,
        });
        Ok(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(byte: u8) -> SimpleTransactionRequest {
        SimpleTransactionRequest::new(Address::repeat_byte(byte), vec![byte; 4])
    }

    #[tokio::test]
    async fn test_canned_return() {
        let mock = MockTransport::new(1);
        mock.on_call(&req(1), vec![9, 9]);

        assert_eq!(mock.call(&req(1)).await.unwrap(), Bytes::from(vec![9, 9]));
        assert!(mock.call(&req(2)).await.unwrap().is_empty());
        assert_eq!(mock.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_canned_revert() {
        let mock = MockTransport::new(1);
        mock.on_call_revert(&req(1), vec![0xaa]);

        let err = mock.call(&req(1)).await.unwrap_err();
        assert!(matches!(err, EnsError::ContractReverted { data } if data == vec![0xaa]));
    }

    #[tokio::test]
    async fn test_sent_transactions_get_distinct_hashes() {
        let mock = MockTransport::new(1);
        let from = Address::repeat_byte(7);

        let a = mock.send_transaction(&req(1), from).await.unwrap();
        let b = mock.send_transaction(&req(1), from).await.unwrap();

        assert_ne!(a, b);
        let sent = mock.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].from, from);
        assert_eq!(sent[1].hash, b);
    }
}
