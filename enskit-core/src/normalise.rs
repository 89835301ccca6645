//! Name hashing and wire encoding.
//!
//! Implements EIP-137 `namehash`/`labelhash` and the DNS wire format the
//! UniversalResolver expects. Normalisation is structural only: names are
//! trimmed and lowercased, and empty labels are rejected.

use alloy::primitives::{keccak256, B256};

use crate::error::{EnsError, Result};

/// Normalizes an ENS name (trim, lowercase, validate label structure).
pub fn normalize(name: &str) -> Result<String> {
    let normalized = name.trim().to_lowercase();

    if normalized.is_empty() {
        return Err(EnsError::InvalidName("name cannot be empty".into()));
    }

    if normalized.split('.').any(str::is_empty) {
        return Err(EnsError::InvalidName(format!(
            "'{normalized}' contains an empty label"
        )));
    }

    if normalized.chars().any(char::is_whitespace) {
        return Err(EnsError::InvalidName(format!(
            "'{normalized}' contains whitespace"
        )));
    }

    Ok(normalized)
}

/// Parses a label written as an encoded labelhash: `[<64 hex chars>]`.
pub fn decode_labelhash(label: &str) -> Option<B256> {
    let inner = label.strip_prefix('[')?.strip_suffix(']')?;
    if inner.len() != 64 {
        return None;
    }
    let bytes = hex::decode(inner).ok()?;
    Some(B256::from_slice(&bytes))
}

/// Formats a labelhash as an encoded label: `[<64 hex chars>]`.
pub fn encode_labelhash(hash: B256) -> String {
    format!("[{}]", hex::encode(hash))
}

/// Hashes a single label.
pub fn labelhash(label: &str) -> B256 {
    decode_labelhash(label).unwrap_or_else(|| keccak256(label.as_bytes()))
}

/// Computes the EIP-137 namehash. The empty name hashes to zero.
pub fn namehash(name: &str) -> B256 {
    let mut node = B256::ZERO;

    if name.is_empty() {
        return node;
    }

    for label in name.rsplit('.') {
        let mut combined = [0u8; 64];
        combined[..32].copy_from_slice(node.as_slice());
        combined[32..].copy_from_slice(labelhash(label).as_slice());
        node = keccak256(combined);
    }

    node
}

/// DNS wire encoding of a name: length-prefixed labels, zero terminated.
///
/// Labels over 255 bytes cannot be length-prefixed and are replaced by
/// their encoded labelhash.
pub fn packet_to_bytes(name: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(name.len() + 2);

    if !name.is_empty() {
        for label in name.split('.') {
            let encoded;
            let bytes = if label.len() > 255 {
                encoded = encode_labelhash(keccak256(label.as_bytes()));
                encoded.as_bytes()
            } else {
                label.as_bytes()
            };
            out.push(bytes.len() as u8);
            out.extend_from_slice(bytes);
        }
    }

    out.push(0);
    out
}
