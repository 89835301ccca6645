//! ETHRegistrarController snippets.

use alloy::sol;

sol! {
    #[allow(missing_docs)]
    interface EthRegistrarController {
        function commit(bytes32 commitment) external;

        function commitments(bytes32 commitment) external view returns (uint256);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::sol_types::SolCall;

    #[test]
    fn test_selectors() {
        assert_eq!(hex::encode(EthRegistrarController::commitCall::SELECTOR), "f14fcbc8");
        assert_eq!(hex::encode(EthRegistrarController::commitmentsCall::SELECTOR), "839df945");
    }
}
