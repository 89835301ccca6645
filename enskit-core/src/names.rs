//! Name structure helpers.

use alloy::primitives::B256;

use crate::normalise::{labelhash, namehash};
use crate::types::NameType;

/// Classifies a name by label count and whether it sits under `eth`.
pub fn get_name_type(name: &str) -> NameType {
    if name.is_empty() || name == "[root]" {
        return NameType::Root;
    }

    let labels: Vec<&str> = name.split('.').collect();
    let is_dot_eth = labels.last() == Some(&"eth");

    match (labels.len(), is_dot_eth) {
        (1, true) => NameType::EthTld,
        (1, false) => NameType::Tld,
        (2, true) => NameType::Eth2ld,
        (2, false) => NameType::Other2ld,
        (_, true) => NameType::EthSubname,
        (_, false) => NameType::OtherSubname,
    }
}

/// First label of a name together with the hashes needed to address it
/// through its parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelNodeAndParent {
    /// The leftmost label
    pub label: String,
    /// keccak256 of the label
    pub labelhash: B256,
    /// namehash of everything right of the label
    pub parent_node: B256,
}

/// Splits `name` into its first label and the parent node.
pub fn make_label_node_and_parent(name: &str) -> LabelNodeAndParent {
    let (label, parent) = name.split_once('.').unwrap_or((name, ""));
    LabelNodeAndParent {
        label: label.to_string(),
        labelhash: labelhash(label),
        parent_node: namehash(parent),
    }
}
