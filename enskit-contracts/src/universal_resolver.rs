//! UniversalResolver snippets and revert decoding.

use alloy::primitives::Bytes;
use alloy::sol;
use alloy::sol_types::SolError;

sol! {
    #[allow(missing_docs)]
    interface UniversalResolver {
        struct HttpErrorItem {
            uint16 status;
            string message;
        }

        error ResolverNotFound();
        error ResolverWildcardNotSupported();
        error ResolverNotContract();
        error ResolverError(bytes returnData);
        error HttpError(HttpErrorItem[] errors);

        function resolve(bytes memory name, bytes memory data)
            external
            view
            returns (bytes memory data, address resolver);

        function reverse(bytes memory reverseName)
            external
            view
            returns (
                string memory resolvedName,
                address resolvedAddress,
                address reverseResolver,
                address resolver
            );

        function findResolver(bytes memory name) external view returns (address, bytes32);
    }
}

/// A revert raised by the UniversalResolver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UniversalResolverError {
    /// No resolver is set for the name or any parent
    ResolverNotFound,
    /// The resolver found for a parent does not implement ENSIP-10
    ResolverWildcardNotSupported,
    /// The resolver address has no code
    ResolverNotContract,
    /// The resolver itself reverted
    ResolverError(Bytes),
    /// Offchain (CCIP-read) gateways failed
    HttpError(Vec<(u16, String)>),
}

impl UniversalResolverError {
    /// Short identifier, matching the Solidity error name.
    pub fn name(&self) -> &'static str {
        match self {
            UniversalResolverError::ResolverNotFound => "ResolverNotFound",
            UniversalResolverError::ResolverWildcardNotSupported => "ResolverWildcardNotSupported",
            UniversalResolverError::ResolverNotContract => "ResolverNotContract",
            UniversalResolverError::ResolverError(_) => "ResolverError",
            UniversalResolverError::HttpError(_) => "HttpError",
        }
    }
}

/// Decodes revert data returned by a UniversalResolver call.
///
/// Returns `None` when the data does not match any UniversalResolver error.
pub fn decode_universal_resolver_error(data: &[u8]) -> Option<UniversalResolverError> {
    let selector: [u8; 4] = data.get(..4)?.try_into().ok()?;

    let err = if selector == UniversalResolver::ResolverNotFound::SELECTOR {
        UniversalResolverError::ResolverNotFound
    } else if selector == UniversalResolver::ResolverWildcardNotSupported::SELECTOR {
        UniversalResolverError::ResolverWildcardNotSupported
    } else if selector == UniversalResolver::ResolverNotContract::SELECTOR {
        UniversalResolverError::ResolverNotContract
    } else if selector == UniversalResolver::ResolverError::SELECTOR {
        let decoded = UniversalResolver::ResolverError::abi_decode(data, true).ok()?;
        UniversalResolverError::ResolverError(decoded.returnData)
    } else if selector == UniversalResolver::HttpError::SELECTOR {
        let decoded = UniversalResolver::HttpError::abi_decode(data, true).ok()?;
        UniversalResolverError::HttpError(
            decoded
                .errors
                .into_iter()
                .map(|item| (item.status, item.message))
                .collect(),
        )
    } else {
        return None;
    };

    Some(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::sol_types::SolCall;

    #[test]
    fn test_selectors() {
        assert_eq!(hex::encode(UniversalResolver::resolveCall::SELECTOR), "9061b923");
        assert_eq!(hex::encode(UniversalResolver::reverseCall::SELECTOR), "ec11c823");
        assert_eq!(hex::encode(UniversalResolver::findResolverCall::SELECTOR), "a1cbcbaf");
        assert_eq!(hex::encode(UniversalResolver::ResolverNotFound::SELECTOR), "7199966d");
        assert_eq!(hex::encode(UniversalResolver::ResolverError::SELECTOR), "95c0c752");
    }

    #[test]
    fn test_decode_resolver_not_found() {
        let data = UniversalResolver::ResolverNotFound {}.abi_encode();
        assert_eq!(
            decode_universal_resolver_error(&data),
            Some(UniversalResolverError::ResolverNotFound)
        );
    }

    #[test]
    fn test_decode_resolver_error_payload() {
        let data = UniversalResolver::ResolverError {
            returnData: Bytes::from(vec![1, 2, 3]),
        }
        .abi_encode();
        assert_eq!(
            decode_universal_resolver_error(&data),
            Some(UniversalResolverError::ResolverError(Bytes::from(vec![1, 2, 3])))
        );
    }

    #[test]
    fn test_decode_http_error() {
        let data = UniversalResolver::HttpError {
            errors: vec![UniversalResolver::HttpErrorItem {
                status: 404,
                message: "not found".into(),
            }],
        }
        .abi_encode();
        let err = decode_universal_resolver_error(&data).unwrap();
        assert_eq!(err, UniversalResolverError::HttpError(vec![(404, "not found".into())]));
        assert_eq!(err.name(), "HttpError");
    }

    #[test]
    fn test_decode_unknown() {
        assert_eq!(decode_universal_resolver_error(&[]), None);
        assert_eq!(decode_universal_resolver_error(&[0xde, 0xad, 0xbe, 0xef]), None);
    }
}
