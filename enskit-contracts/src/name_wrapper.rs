//! NameWrapper snippets.

use alloy::sol;

sol! {
    #[allow(missing_docs)]
    interface NameWrapper {
        function ownerOf(uint256 id) external view returns (address owner);

        function getFuses(bytes32 node)
            external
            view
            returns (uint32 fuses, uint8 vulnerability, bytes32 vulnerableNode);

        function setRecord(
            bytes32 node,
            address owner,
            address resolver,
            uint64 ttl
        ) external;

        function setSubnodeRecord(
            bytes32 parentNode,
            string calldata label,
            address owner,
            address resolver,
            uint64 ttl,
            uint32 fuses,
            uint64 expiry
        ) external returns (bytes32 node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::sol_types::SolCall;

    #[test]
    fn test_selectors() {
        assert_eq!(hex::encode(NameWrapper::ownerOfCall::SELECTOR), "6352211e");
        assert_eq!(hex::encode(NameWrapper::getFusesCall::SELECTOR), "4ac07f41");
        assert_eq!(hex::encode(NameWrapper::setRecordCall::SELECTOR), "cf408823");
        assert_eq!(hex::encode(NameWrapper::setSubnodeRecordCall::SELECTOR), "24c1af44");
    }
}
