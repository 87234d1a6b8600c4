use alloy::sol;

sol! {
    /// Daily MET auctions.
    ///
    /// Only the read surface is declared; `heartbeat` bundles most of the
    /// auction state into a single call.
    #[sol(rpc)]
    interface IAuctions {
        function dailyAuctionStartTime() external view returns (uint256);

        function lastPurchaseTick() external view returns (uint256);

        function mintable() external view returns (uint256);

        function heartbeat()
            external
            view
            returns (
                bytes8 _chain,
                address auctionAddr,
                address convertAddr,
                address tokenAddr,
                uint256 minting,
                uint256 totalMET,
                uint256 proceedsBal,
                uint256 currTick,
                uint256 currAuction,
                uint256 nextAuctionGMT,
                uint256 genesisGMT,
                uint256 currentAuctionPrice,
                uint256 _dailyMintable,
                uint256 _lastPurchasePrice
            );
    }
}
