//! Protocol constants for enskit.
//!
//! Values fixed by the ENS contracts and the chains they are deployed on.

use alloy::primitives::Address;

// ═══════════════════════════════════════════════════════════════════════════════
// ADDRESSES
// ═══════════════════════════════════════════════════════════════════════════════

/// The zero address. Clears owner and resolver fields.
pub const EMPTY_ADDRESS: Address = Address::ZERO;

// ═══════════════════════════════════════════════════════════════════════════════
// CHAINS
// ═══════════════════════════════════════════════════════════════════════════════

/// Ethereum mainnet.
pub const MAINNET_CHAIN_ID: u64 = 1;

/// Sepolia testnet.
pub const SEPOLIA_CHAIN_ID: u64 = 11_155_111;

/// Holesky testnet.
pub const HOLESKY_CHAIN_ID: u64 = 17_000;

/// Default Ethereum RPC URL when none is provided.
pub const DEFAULT_ETH_RPC_URL: &str = "https://ethereum.publicnode.com";

// ═══════════════════════════════════════════════════════════════════════════════
// NAME WRAPPER
// ═══════════════════════════════════════════════════════════════════════════════

/// Largest expiry the NameWrapper stores (uint64).
pub const MAX_EXPIRY: u64 = u64::MAX;

/// Longest label the NameWrapper accepts, in bytes.
pub const MAX_WRAPPED_LABEL_LENGTH: usize = 255;

/// Fuses an owner may burn on their own name (uint16 range).
pub const CHILD_CONTROLLED_FUSES: u32 = 0x0000_ffff;

/// Fuses only the parent may burn.
pub const PARENT_CONTROLLED_FUSES: u32 = 0xffff_0000;

// ═══════════════════════════════════════════════════════════════════════════════
// RESOLVER RECORDS
// ═══════════════════════════════════════════════════════════════════════════════

/// ABI record content type: JSON.
pub const ABI_CONTENT_TYPE_JSON: u64 = 1;

/// ABI record content type: zlib-compressed JSON.
pub const ABI_CONTENT_TYPE_ZLIB: u64 = 2;

/// ABI record content type: CBOR.
pub const ABI_CONTENT_TYPE_CBOR: u64 = 4;

/// ABI record content type: URI.
pub const ABI_CONTENT_TYPE_URI: u64 = 8;

/// Bitwise OR of every ABI content type this library can decode.
pub const SUPPORTED_ABI_CONTENT_TYPES: u64 =
    ABI_CONTENT_TYPE_JSON | ABI_CONTENT_TYPE_ZLIB | ABI_CONTENT_TYPE_CBOR | ABI_CONTENT_TYPE_URI;

/// SLIP-44 coin type for ETH address records.
pub const ETH_COIN_TYPE: u64 = 60;

// ═══════════════════════════════════════════════════════════════════════════════
// REGISTRATION
// ═══════════════════════════════════════════════════════════════════════════════

/// Size of a registration commitment secret.
pub const COMMITMENT_SECRET_SIZE: usize = 32;

/// Suffix of reverse-resolution nodes.
pub const REVERSE_SUFFIX: &str = "addr.reverse";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_content_types_mask() {
        assert_eq!(SUPPORTED_ABI_CONTENT_TYPES, 0xf);
    }

    #[test]
    fn test_fuse_ranges_are_disjoint() {
        assert_eq!(CHILD_CONTROLLED_FUSES & PARENT_CONTROLLED_FUSES, 0);
        assert_eq!(CHILD_CONTROLLED_FUSES | PARENT_CONTROLLED_FUSES, u32::MAX);
    }
}
