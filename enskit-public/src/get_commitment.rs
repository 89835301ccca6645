//! Registration commitment lookup.

use alloy::primitives::{B256, U256};
use alloy::sol_types::SolCall;

use enskit_contracts::{ChainContracts, ContractName, EthRegistrarController};
use enskit_core::error::{EnsError, Result};
use enskit_core::types::SimpleTransactionRequest;

use crate::function::EnsReadFunction;

/// Parameters for [`GetCommitmentTimestamp`].
#[derive(Clone, Debug)]
pub struct GetCommitmentParams {
    /// Commitment hash previously sent with `commit`
    pub commitment: B256,
}

/// Reads when a commitment was made (unix seconds). Unknown commitments
/// yield `None`.
pub struct GetCommitmentTimestamp;

impl EnsReadFunction for GetCommitmentTimestamp {
    type Params = GetCommitmentParams;
    type Output = Option<u64>;

    fn encode(contracts: &ChainContracts, params: &Self::Params) -> Result<SimpleTransactionRequest> {
        let call = EthRegistrarController::commitmentsCall {
            commitment: params.commitment,
        };
        Ok(SimpleTransactionRequest::new(
            contracts.address(ContractName::EnsEthRegistrarController)?,
            call.abi_encode(),
        ))
    }

    fn decode(_: &ChainContracts, data: &[u8], _: &Self::Params) -> Result<Self::Output> {
        if data.is_empty() {
            return Ok(None);
        }
        let timestamp = EthRegistrarController::commitmentsCall::abi_decode_returns(data, true)?._0;
        if timestamp == U256::ZERO {
            return Ok(None);
        }
        let seconds = u64::try_from(timestamp).map_err(|_| {
            EnsError::AbiEncodingError(format!("commitment timestamp {timestamp} out of range"))
        })?;
        Ok(Some(seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_timestamp() {
        let contracts = ChainContracts::for_chain(1).unwrap();
        let params = GetCommitmentParams {
            commitment: B256::repeat_byte(9),
        };

        let request = GetCommitmentTimestamp::encode(&contracts, &params).unwrap();
        assert_eq!(
            request.to,
            contracts.address(ContractName::EnsEthRegistrarController).unwrap()
        );

        let data = EthRegistrarController::commitmentsCall::abi_encode_returns(&(U256::from(
            1_700_000_000u64,
        ),));
        assert_eq!(
            GetCommitmentTimestamp::decode(&contracts, &data, &params).unwrap(),
            Some(1_700_000_000)
        );

        let unknown = EthRegistrarController::commitmentsCall::abi_encode_returns(&(U256::ZERO,));
        assert_eq!(
            GetCommitmentTimestamp::decode(&contracts, &unknown, &params).unwrap(),
            None
        );
    }
}
