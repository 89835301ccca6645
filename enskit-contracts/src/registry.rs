//! ENS Registry snippets.

use alloy::sol;

sol! {
    #[allow(missing_docs)]
    interface EnsRegistry {
        function owner(bytes32 node) external view returns (address);

        function setSubnodeRecord(
            bytes32 node,
            bytes32 label,
            address owner,
            address resolver,
            uint64 ttl
        ) external;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::sol_types::SolCall;

    #[test]
    fn test_selectors() {
        assert_eq!(hex::encode(EnsRegistry::setSubnodeRecordCall::SELECTOR), "5ef2c7f0");
        assert_eq!(hex::encode(EnsRegistry::ownerCall::SELECTOR), "02571be3");
    }
}
