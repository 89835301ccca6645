//! Routing resolver calls through the UniversalResolver.

use alloy::primitives::{Address, Bytes};
use alloy::sol_types::SolCall;
use tracing::debug;

use enskit_contracts::{
    decode_universal_resolver_error, ChainContracts, ContractName, UniversalResolver,
};
use enskit_core::error::{EnsError, Result};
use enskit_core::packet_to_bytes;
use enskit_core::types::SimpleTransactionRequest;

/// Wraps resolver calldata in `resolve(dnsName, data)`.
pub fn encode_universal_resolve(
    contracts: &ChainContracts,
    name: &str,
    resolver_calldata: impl Into<Bytes>,
) -> Result<SimpleTransactionRequest> {
    let call = UniversalResolver::resolveCall {
        name: Bytes::from(packet_to_bytes(name)),
        data: resolver_calldata.into(),
    };
    Ok(SimpleTransactionRequest::new(
        contracts.address(ContractName::EnsUniversalResolver)?,
        call.abi_encode(),
    ))
}

/// Unwraps a `resolve` result into the resolver's return data and the
/// resolver address. Empty call data yields `None`.
pub fn decode_universal_resolve(data: &[u8]) -> Result<Option<(Bytes, Address)>> {
    if data.is_empty() {
        return Ok(None);
    }
    let decoded = UniversalResolver::resolveCall::abi_decode_returns(data, true)?;
    Ok(Some((decoded.data, decoded.resolver)))
}

/// Maps a UniversalResolver revert to "no result"; any other revert stays an
/// error.
pub fn universal_revert_to_none<T>(revert_data: Vec<u8>) -> Result<Option<T>> {
    match decode_universal_resolver_error(&revert_data) {
        Some(err) => {
            debug!(error = err.name(), "UniversalResolver reverted");
            Ok(None)
        }
        None => Err(EnsError::ContractReverted { data: revert_data }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::sol_types::SolError;

    #[test]
    fn test_encode_targets_universal_resolver() {
        let contracts = ChainContracts::for_chain(1).unwrap();
        let request = encode_universal_resolve(&contracts, "alice.eth", vec![1, 2, 3, 4]).unwrap();

        assert_eq!(
            request.to,
            contracts.address(ContractName::EnsUniversalResolver).unwrap()
        );
        let call = UniversalResolver::resolveCall::abi_decode(&request.data, true).unwrap();
        assert_eq!(call.name.to_vec(), packet_to_bytes("alice.eth"));
        assert_eq!(call.data.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_decode_empty_is_none() {
        assert_eq!(decode_universal_resolve(&[]).unwrap(), None);
    }

    #[test]
    fn test_revert_mapping() {
        let not_found = UniversalResolver::ResolverNotFound {}.abi_encode();
        assert_eq!(universal_revert_to_none::<u8>(not_found).unwrap(), None);

        let err = universal_revert_to_none::<u8>(vec![0xde, 0xad, 0xbe, 0xef]).unwrap_err();
        assert!(matches!(err, EnsError::ContractReverted { .. }));
    }
}
