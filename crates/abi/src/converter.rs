use alloy::sol;

sol! {
    /// Autonomous converter between the chain's native coin and MET.
    #[sol(rpc)]
    interface IAutonomousConverter {
        function getEthForMetResult(uint256 _depositAmount) external view returns (uint256);

        function getEthBalance() external view returns (uint256);

        function getMetBalance() external view returns (uint256);
    }
}
