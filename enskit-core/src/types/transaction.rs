//! Transaction request produced by every encode step.

use alloy::primitives::{Address, Bytes};

/// A contract call: target address plus ABI-encoded calldata.
///
/// Reads send it through `eth_call`; writes through `eth_sendTransaction`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleTransactionRequest {
    /// Contract address
    pub to: Address,
    /// ABI-encoded calldata, selector included
    pub data: Bytes,
}

impl SimpleTransactionRequest {
    /// Creates a request from a target and raw calldata.
    pub fn new(to: Address, data: impl Into<Bytes>) -> Self {
        Self {
            to,
            data: data.into(),
        }
    }

    /// The 4-byte function selector, if present.
    pub fn selector(&self) -> Option<[u8; 4]> {
        self.data.get(..4).and_then(|s| s.try_into().ok())
    }

    /// JSON object in the shape expected by `eth_call` / `eth_sendTransaction`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "to": format!("{:#x}", self.to),
            "data": format!("0x{}", hex::encode(&self.data)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector() {
        let req = SimpleTransactionRequest::new(Address::ZERO, vec![0x22, 0x03, 0xab, 0x56, 0x00]);
        assert_eq!(req.selector(), Some([0x22, 0x03, 0xab, 0x56]));

        let short = SimpleTransactionRequest::new(Address::ZERO, vec![0x01]);
        assert_eq!(short.selector(), None);
    }

    #[test]
    fn test_to_json() {
        let req = SimpleTransactionRequest::new(Address::repeat_byte(0xab), vec![0xde, 0xad]);
        let json = req.to_json();
        assert_eq!(json["to"], format!("0x{}", "ab".repeat(20)));
        assert_eq!(json["data"], "0xdead");
    }
}
