//! ABI record lookup (ENSIP-4).

use std::io::Read;

use alloy::primitives::{Bytes, U256};
use alloy::sol_types::SolCall;
use flate2::read::ZlibDecoder;

use enskit_contracts::{ChainContracts, PublicResolver};
use enskit_core::constants::{
    ABI_CONTENT_TYPE_CBOR, ABI_CONTENT_TYPE_JSON, ABI_CONTENT_TYPE_URI, ABI_CONTENT_TYPE_ZLIB,
    SUPPORTED_ABI_CONTENT_TYPES,
};
use enskit_core::error::{EnsError, Result};
use enskit_core::namehash;
use enskit_core::types::{AbiPayload, DecodedAbi, SimpleTransactionRequest};

use crate::function::EnsReadFunction;
use crate::universal::{decode_universal_resolve, encode_universal_resolve, universal_revert_to_none};

/// Parameters for [`GetAbiRecord`].
#[derive(Clone, Debug)]
pub struct GetAbiRecordParams {
    /// Name to read the ABI record of
    pub name: String,
}

/// Reads the ABI record of a name through the UniversalResolver.
pub struct GetAbiRecord;

impl EnsReadFunction for GetAbiRecord {
    type Params = GetAbiRecordParams;
    type Output = Option<DecodedAbi>;

    fn encode(contracts: &ChainContracts, params: &Self::Params) -> Result<SimpleTransactionRequest> {
        let inner = PublicResolver::ABICall {
            node: namehash(&params.name),
            contentTypes: U256::from(SUPPORTED_ABI_CONTENT_TYPES),
        };
        encode_universal_resolve(contracts, &params.name, inner.abi_encode())
    }

    fn decode(_: &ChainContracts, data: &[u8], _: &Self::Params) -> Result<Self::Output> {
        match decode_universal_resolve(data)? {
            Some((resolver_data, _)) => decode_abi_result(&resolver_data),
            None => Ok(None),
        }
    }

    fn decode_revert(revert_data: Vec<u8>, _: &Self::Params) -> Result<Self::Output> {
        universal_revert_to_none(revert_data)
    }
}

/// Decodes the return data of a resolver's `ABI(bytes32,uint256)`.
pub fn decode_abi_result(data: &[u8]) -> Result<Option<DecodedAbi>> {
    if data.is_empty() {
        return Ok(None);
    }

    let decoded = PublicResolver::ABICall::abi_decode_returns(data, true)?;
    let content_type: u64 = decoded._0.try_into().map_err(|_| {
        EnsError::AbiEncodingError(format!("content type {} does not fit in u64", decoded._0))
    })?;

    decode_abi_payload(content_type, &decoded._1)
}

/// Interprets a stored ABI payload according to its content type.
///
/// Content type 0 or an empty payload means "no record".
pub fn decode_abi_payload(content_type: u64, payload: &[u8]) -> Result<Option<DecodedAbi>> {
    if content_type == 0 || payload.is_empty() {
        return Ok(None);
    }

    let (decoded, abi) = match content_type {
        ABI_CONTENT_TYPE_JSON => (true, AbiPayload::Json(serde_json::from_slice(payload)?)),
        ABI_CONTENT_TYPE_ZLIB => {
            let mut inflated = Vec::new();
            ZlibDecoder::new(payload)
                .read_to_end(&mut inflated)
                .map_err(|e| EnsError::AbiEncodingError(format!("zlib inflate failed: {e}")))?;
            (true, AbiPayload::Json(serde_json::from_slice(&inflated)?))
        }
        ABI_CONTENT_TYPE_CBOR => {
            let value: ciborium::Value = ciborium::from_reader(payload)
                .map_err(|e| EnsError::AbiEncodingError(format!("CBOR decode failed: {e}")))?;
            (true, AbiPayload::Json(cbor_to_json(value)))
        }
        ABI_CONTENT_TYPE_URI => (true, AbiPayload::Text(utf8_text(payload)?)),
        _ => match std::str::from_utf8(payload) {
            Ok(text) => (true, AbiPayload::Text(text.to_string())),
            Err(_) => (false, AbiPayload::Raw(Bytes::copy_from_slice(payload))),
        },
    };

    Ok(Some(DecodedAbi {
        content_type,
        decoded,
        abi,
    }))
}

/// Converts CBOR into JSON. Byte strings become `0x` hex, tags are dropped in
/// favour of their content, and non-string map keys are stringified.
fn cbor_to_json(value: ciborium::Value) -> serde_json::Value {
    use ciborium::Value as Cbor;
    use serde_json::Value as Json;

    match value {
        Cbor::Null => Json::Null,
        Cbor::Bool(b) => Json::Bool(b),
        Cbor::Text(text) => Json::String(text),
        Cbor::Bytes(bytes) => Json::String(format!("0x{}", hex::encode(bytes))),
        Cbor::Integer(int) => {
            let n = i128::from(int);
            if let Ok(n) = i64::try_from(n) {
                Json::from(n)
            } else if let Ok(n) = u64::try_from(n) {
                Json::from(n)
            } else {
                Json::String(n.to_string())
            }
        }
        Cbor::Float(f) => serde_json::Number::from_f64(f).map_or(Json::Null, Json::Number),
        Cbor::Tag(_, inner) => cbor_to_json(*inner),
        Cbor::Array(items) => Json::Array(items.into_iter().map(cbor_to_json).collect()),
        Cbor::Map(entries) => Json::Object(
            entries
                .into_iter()
                .map(|(key, value)| {
                    let key = match cbor_to_json(key) {
                        Json::String(key) => key,
                        other => other.to_string(),
                    };
                    (key, cbor_to_json(value))
                })
                .collect(),
        ),
        _ => Json::Null,
    }
}

fn utf8_text(payload: &[u8]) -> Result<String> {
    String::from_utf8(payload.to_vec())
        .map_err(|e| EnsError::AbiEncodingError(format!("URI record is not UTF-8: {e}")))
}
