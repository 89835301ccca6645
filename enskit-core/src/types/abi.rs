//! ABI record types (ENSIP-4).

use alloy::primitives::Bytes;
use serde::{Deserialize, Serialize};

use crate::constants::{
    ABI_CONTENT_TYPE_CBOR, ABI_CONTENT_TYPE_JSON, ABI_CONTENT_TYPE_URI, ABI_CONTENT_TYPE_ZLIB,
};

/// How an ABI record payload is stored on the resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbiEncodeAs {
    /// Plain JSON (content type 1)
    Json,
    /// zlib-compressed JSON (content type 2)
    Zlib,
    /// CBOR (content type 4)
    Cbor,
    /// A URI pointing at the ABI (content type 8)
    Uri,
}

impl AbiEncodeAs {
    /// Content type id written next to the payload.
    pub fn content_type(&self) -> u64 {
        match self {
            AbiEncodeAs::Json => ABI_CONTENT_TYPE_JSON,
            AbiEncodeAs::Zlib => ABI_CONTENT_TYPE_ZLIB,
            AbiEncodeAs::Cbor => ABI_CONTENT_TYPE_CBOR,
            AbiEncodeAs::Uri => ABI_CONTENT_TYPE_URI,
        }
    }
}

impl std::str::FromStr for AbiEncodeAs {
    type Err = crate::error::EnsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(AbiEncodeAs::Json),
            "zlib" => Ok(AbiEncodeAs::Zlib),
            "cbor" => Ok(AbiEncodeAs::Cbor),
            "uri" => Ok(AbiEncodeAs::Uri),
            other => Err(crate::error::EnsError::AbiEncodingError(format!(
                "unknown ABI encoding '{other}' (expected json, zlib, cbor or uri)"
            ))),
        }
    }
}

/// An ABI payload ready to be written with `setABI`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedAbi {
    /// Content type id (1, 2, 4 or 8)
    pub content_type: u64,
    /// Encoded payload
    pub encoded_data: Bytes,
}

/// Decoded contents of an ABI record.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AbiPayload {
    /// JSON, zlib-JSON or CBOR records
    Json(serde_json::Value),
    /// URI records, or unknown content types that are valid UTF-8
    Text(String),
    /// Unknown content types that are not UTF-8
    Raw(Bytes),
}

/// ABI record read from a resolver.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedAbi {
    /// Content type id the record was stored with
    pub content_type: u64,
    /// Whether the payload was understood
    pub decoded: bool,
    /// The payload
    pub abi: AbiPayload,
}
