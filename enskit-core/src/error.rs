//! Error types for enskit.
//!
//! A single error hierarchy using `thiserror`. Argument errors carry the
//! offending value and the values that would have been accepted.

use thiserror::Error;

use crate::types::NameType;

/// Result type alias using `EnsError`.
pub type Result<T> = std::result::Result<T, EnsError>;

/// Main error type for all enskit operations.
#[derive(Debug, Error)]
pub enum EnsError {
    // ═══════════════════════════════════════════════════════════════════════════
    // ARGUMENT ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The operation does not apply to this kind of name.
    #[error("Unsupported name type: {name_type} (supported: {}). {details}", join(.supported))]
    UnsupportedNameType {
        /// Type of the name given
        name_type: NameType,
        /// Types the operation accepts
        supported: Vec<NameType>,
        /// Human-readable reason
        details: String,
    },

    /// A parameter was given that the selected contract cannot honour.
    #[error("Additional parameter specified: {parameter} (allowed: {}). {details}", .allowed.join(", "))]
    AdditionalParameterSpecified {
        /// The rejected parameter
        parameter: String,
        /// Parameters the contract accepts
        allowed: Vec<String>,
        /// Human-readable reason
        details: String,
    },

    /// Unknown contract selector.
    #[error("Invalid contract type: {contract_type} (supported: {})", .supported.join(", "))]
    InvalidContractType {
        /// The selector given
        contract_type: String,
        /// Known selectors
        supported: Vec<String>,
    },

    /// NameWrapper labels are stored on-chain and capped at 255 bytes.
    #[error("Wrapped label too large: '{label}' is {byte_length} bytes (max 255)")]
    WrappedLabelTooLarge {
        /// The label
        label: String,
        /// Its UTF-8 length
        byte_length: usize,
    },

    /// Fuses outside the allowed range were requested.
    #[error("Fuses out of range: {fuses:#x} (allowed bits: {max:#x})")]
    FusesOutOfRange {
        /// Requested bitmask
        fuses: u32,
        /// Bits that may be set
        max: u32,
    },

    /// Fuses could not be parsed.
    #[error("Invalid fuses: {0}")]
    InvalidFuses(String),

    /// A reverse record was requested without a resolver to set it on.
    #[error("Resolver address is required when setting a reverse record")]
    ResolverAddressRequired,

    /// Name failed structural validation.
    #[error("Invalid name: {0}")]
    InvalidName(String),

    /// Expiry could not be interpreted as a unix timestamp.
    #[error("Invalid expiry: {0}")]
    InvalidExpiry(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // CHAIN / CONTRACT ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// No ENS deployment is known for this chain.
    #[error("Unsupported chain: {0}")]
    UnsupportedChain(u64),

    /// The chain has no address for the requested contract.
    #[error("Contract '{contract}' not found on chain {chain_id}")]
    ContractNotFound {
        /// Chain searched
        chain_id: u64,
        /// Contract name
        contract: String,
    },

    /// The contract call reverted; `data` is the raw revert payload.
    #[error("Contract call reverted (data: 0x{})", hex::encode(.data))]
    ContractReverted {
        /// Revert payload
        data: Vec<u8>,
    },

    // ═══════════════════════════════════════════════════════════════════════════
    // CODEC ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// ABI encoding/decoding failed.
    #[error("ABI error: {0}")]
    AbiError(#[from] alloy::sol_types::Error),

    /// ABI record payload could not be encoded or decoded.
    #[error("ABI record encoding error: {0}")]
    AbiEncodingError(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid hex encoding.
    #[error("Invalid hex encoding: {0}")]
    HexError(#[from] hex::FromHexError),

    // ═══════════════════════════════════════════════════════════════════════════
    // NETWORK ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// JSON-RPC call returned an error object.
    #[error("RPC error {code}: {message}")]
    RpcError {
        /// JSON-RPC error code
        code: i64,
        /// Error message
        message: String,
    },

    /// Connection timeout.
    #[error("Connection timeout: {0}")]
    ConnectionTimeout(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // OTHER
    // ═══════════════════════════════════════════════════════════════════════════

    /// File I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

fn join(types: &[NameType]) -> String {
    types
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl EnsError {
    /// Builds an [`EnsError::UnsupportedNameType`].
    pub fn unsupported_name_type(
        name_type: NameType,
        supported: &[NameType],
        details: impl Into<String>,
    ) -> Self {
        EnsError::UnsupportedNameType {
            name_type,
            supported: supported.to_vec(),
            details: details.into(),
        }
    }

    /// Builds an [`EnsError::AdditionalParameterSpecified`].
    pub fn additional_parameter(
        parameter: &str,
        allowed: &[&str],
        details: impl Into<String>,
    ) -> Self {
        EnsError::AdditionalParameterSpecified {
            parameter: parameter.to_string(),
            allowed: allowed.iter().map(|s| s.to_string()).collect(),
            details: details.into(),
        }
    }

    /// Returns true if this error is recoverable (can retry).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EnsError::HttpError(_) | EnsError::ConnectionTimeout(_) | EnsError::RpcError { .. }
        )
    }

    /// Returns true if the caller passed arguments that can never succeed.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            EnsError::UnsupportedNameType { .. }
                | EnsError::AdditionalParameterSpecified { .. }
                | EnsError::InvalidContractType { .. }
                | EnsError::WrappedLabelTooLarge { .. }
                | EnsError::FusesOutOfRange { .. }
                | EnsError::InvalidFuses(_)
                | EnsError::ResolverAddressRequired
                | EnsError::InvalidName(_)
                | EnsError::InvalidExpiry(_)
        )
    }
}
