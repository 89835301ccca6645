//! Resolver calldata encoders.

use std::io::Write;

use alloy::primitives::{Bytes, B256, U256};
use alloy::sol_types::SolCall;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};

use enskit_contracts::PublicResolver;
use enskit_core::error::{EnsError, Result};
use enskit_core::types::{AbiEncodeAs, EncodedAbi};

/// An ABI to store, and how to store it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodeAbiInput {
    /// Storage format
    pub encode_as: AbiEncodeAs,
    /// The ABI JSON, or for [`AbiEncodeAs::Uri`] a string holding the URI
    pub data: serde_json::Value,
}

/// Encodes an ABI into a resolver payload.
pub fn encode_abi(input: &EncodeAbiInput) -> Result<EncodedAbi> {
    let encoded_data = match input.encode_as {
        AbiEncodeAs::Json => serde_json::to_vec(&input.data)?,
        AbiEncodeAs::Zlib => {
            let json = serde_json::to_vec(&input.data)?;
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(&json)?;
            encoder.finish()?
        }
        AbiEncodeAs::Cbor => {
            let mut out = Vec::new();
            ciborium::into_writer(&input.data, &mut out)
                .map_err(|e| EnsError::AbiEncodingError(format!("CBOR encode failed: {e}")))?;
            out
        }
        AbiEncodeAs::Uri => input
            .data
            .as_str()
            .ok_or_else(|| EnsError::AbiEncodingError("URI ABI data must be a string".into()))?
            .as_bytes()
            .to_vec(),
    };

    Ok(EncodedAbi {
        content_type: input.encode_as.content_type(),
        encoded_data: Bytes::from(encoded_data),
    })
}

/// `setABI` calldata. `None` clears the record (content type 0, no data).
pub fn encode_set_abi(namehash: B256, abi: Option<&EncodedAbi>) -> Bytes {
    let (content_type, data) = match abi {
        Some(abi) => (abi.content_type, abi.encoded_data.clone()),
        None => (0, Bytes::new()),
    };

    PublicResolver::setABICall {
        node: namehash,
        contentType: U256::from(content_type),
        data,
    }
    .abi_encode()
    .into()
}

/// `setText` calldata.
pub fn encode_set_text(namehash: B256, key: &str, value: &str) -> Bytes {
    PublicResolver::setTextCall {
        node: namehash,
        key: key.to_string(),
        value: value.to_string(),
    }
    .abi_encode()
    .into()
}

/// `setAddr(bytes32,uint256,bytes)` calldata. `address` is the coin's
/// binary address format.
pub fn encode_set_addr(namehash: B256, coin_type: u64, address: &[u8]) -> Bytes {
    PublicResolver::setAddrCall {
        node: namehash,
        coinType: U256::from(coin_type),
        a: Bytes::copy_from_slice(address),
    }
    .abi_encode()
    .into()
}

/// `clearRecords` calldata.
pub fn encode_clear_records(namehash: B256) -> Bytes {
    PublicResolver::clearRecordsCall { node: namehash }
        .abi_encode()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use enskit_core::namehash;
    use enskit_core::types::AbiPayload;
    use enskit_public::decode_abi_payload;

    fn sample_abi() -> serde_json::Value {
        serde_json::json!([{ "type": "function", "name": "transfer", "inputs": [] }])
    }

    #[test]
    fn test_encode_json() {
        let encoded = encode_abi(&EncodeAbiInput {
            encode_as: AbiEncodeAs::Json,
            data: sample_abi(),
        })
        .unwrap();

        assert_eq!(encoded.content_type, 1);
        let parsed: serde_json::Value = serde_json::from_slice(&encoded.encoded_data).unwrap();
        assert_eq!(parsed, sample_abi());
    }

    #[test]
    fn test_zlib_and_cbor_are_readable_back() {
        for encode_as in [AbiEncodeAs::Zlib, AbiEncodeAs::Cbor] {
            let encoded = encode_abi(&EncodeAbiInput {
                encode_as,
                data: sample_abi(),
            })
            .unwrap();

            let decoded = decode_abi_payload(encoded.content_type, &encoded.encoded_data)
                .unwrap()
                .unwrap();
            assert_eq!(decoded.abi, AbiPayload::Json(sample_abi()));
        }
    }

    #[test]
    fn test_encode_uri() {
        let encoded = encode_abi(&EncodeAbiInput {
            encode_as: AbiEncodeAs::Uri,
            data: serde_json::json!("ipfs://abi"),
        })
        .unwrap();
        assert_eq!(encoded.content_type, 8);
        assert_eq!(encoded.encoded_data.to_vec(), b"ipfs://abi".to_vec());

        let err = encode_abi(&EncodeAbiInput {
            encode_as: AbiEncodeAs::Uri,
            data: sample_abi(),
        })
        .unwrap_err();
        assert!(matches!(err, EnsError::AbiEncodingError(_)));
    }

    #[test]
    fn test_encode_set_abi() {
        let node = namehash("test.eth");
        let abi = EncodedAbi {
            content_type: 1,
            encoded_data: Bytes::from(b"[]".to_vec()),
        };

        let call = PublicResolver::setABICall::abi_decode(&encode_set_abi(node, Some(&abi)), true)
            .unwrap();
        assert_eq!(call.node, node);
        assert_eq!(call.contentType, U256::from(1));
        assert_eq!(call.data.to_vec(), b"[]".to_vec());

        let cleared =
            PublicResolver::setABICall::abi_decode(&encode_set_abi(node, None), true).unwrap();
        assert_eq!(cleared.contentType, U256::ZERO);
        assert!(cleared.data.is_empty());
    }

    #[test]
    fn test_encode_record_setters() {
        let node = namehash("test.eth");

        let text =
            PublicResolver::setTextCall::abi_decode(&encode_set_text(node, "url", "https://x"), true)
                .unwrap();
        assert_eq!(text.key, "url");
        assert_eq!(text.value, "https://x");

        let addr =
            PublicResolver::setAddrCall::abi_decode(&encode_set_addr(node, 60, &[0x11; 20]), true)
                .unwrap();
        assert_eq!(addr.coinType, U256::from(60));
        assert_eq!(addr.a.to_vec(), vec![0x11; 20]);

        let clear = encode_clear_records(node);
        assert_eq!(clear[..4], PublicResolver::clearRecordsCall::SELECTOR);
    }
}
