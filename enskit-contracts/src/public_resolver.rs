//! PublicResolver snippets.

use alloy::sol;

sol! {
    #[allow(missing_docs)]
    interface PublicResolver {
        function ABI(bytes32 node, uint256 contentTypes)
            external
            view
            returns (uint256, bytes memory);

        function setABI(bytes32 node, uint256 contentType, bytes calldata data) external;

        function setText(bytes32 node, string calldata key, string calldata value) external;

        function setAddr(bytes32 node, uint256 coinType, bytes memory a) external;

        function clearRecords(bytes32 node) external;
    }
}
