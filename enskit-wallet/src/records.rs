//! Batched resolver record updates.

use alloy::primitives::{Address, Bytes, B256};
use serde::{Deserialize, Serialize};

use enskit_core::constants::ETH_COIN_TYPE;
use enskit_core::types::EncodedAbi;

use crate::encoders::{encode_clear_records, encode_set_abi, encode_set_addr, encode_set_text};

/// A text record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    /// Record key, e.g. `url` or `com.github`
    pub key: String,
    /// Record value
    pub value: String,
}

/// An address record for one coin type (SLIP-44, or ENSIP-11 for EVM chains).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinRecord {
    /// Coin type
    pub coin_type: u64,
    /// The address in the coin's binary format
    pub value: Bytes,
}

impl CoinRecord {
    /// An ETH address record.
    pub fn eth(address: Address) -> Self {
        Self {
            coin_type: ETH_COIN_TYPE,
            value: Bytes::copy_from_slice(address.as_slice()),
        }
    }
}

/// Records to write on a resolver in one go.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordOptions {
    /// Wipe every existing record first
    pub clear_records: bool,
    /// ABI records; `None` entries clear the record
    pub abi: Vec<Option<EncodedAbi>>,
    /// Text records
    pub texts: Vec<TextRecord>,
    /// Address records
    pub coins: Vec<CoinRecord>,
}

impl RecordOptions {
    /// True when no record would be written.
    pub fn is_empty(&self) -> bool {
        !self.clear_records && self.abi.is_empty() && self.texts.is_empty() && self.coins.is_empty()
    }
}

/// Resolver calldata for every record in `records`, in the order the
/// resolver should apply them: clear, ABI, texts, coins.
pub fn generate_record_call_array(namehash: B256, records: &RecordOptions) -> Vec<Bytes> {
    let mut calls = Vec::new();

    if records.clear_records {
        calls.push(encode_clear_records(namehash));
    }

    calls.extend(
        records
            .abi
            .iter()
            .map(|abi| encode_set_abi(namehash, abi.as_ref())),
    );

    calls.extend(
        records
            .texts
            .iter()
            .map(|text| encode_set_text(namehash, &text.key, &text.value)),
    );

    calls.extend(
        records
            .coins
            .iter()
            .map(|coin| encode_set_addr(namehash, coin.coin_type, &coin.value)),
    );

    calls
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::sol_types::SolCall;
    use enskit_contracts::PublicResolver;
    use enskit_core::namehash;

    #[test]
    fn test_empty_records_produce_no_calls() {
        let records = RecordOptions::default();
        assert!(records.is_empty());
        assert!(generate_record_call_array(namehash("a.eth"), &records).is_empty());
    }

    #[test]
    fn test_call_order() {
        let records = RecordOptions {
            clear_records: true,
            abi: vec![None],
            texts: vec![TextRecord {
                key: "description".into(),
                value: "hello".into(),
            }],
            coins: vec![CoinRecord::eth(Address::repeat_byte(0x44))],
        };

        let calls = generate_record_call_array(namehash("a.eth"), &records);
        let selectors: Vec<[u8; 4]> = calls
            .iter()
            .map(|c| c[..4].try_into().unwrap())
            .collect();

        assert_eq!(
            selectors,
            vec![
                PublicResolver::clearRecordsCall::SELECTOR,
                PublicResolver::setABICall::SELECTOR,
                PublicResolver::setTextCall::SELECTOR,
                PublicResolver::setAddrCall::SELECTOR,
            ]
        );

        let addr = PublicResolver::setAddrCall::abi_decode(&calls[3], true).unwrap();
        assert_eq!(addr.a.to_vec(), vec![0x44; 20]);
    }
}
