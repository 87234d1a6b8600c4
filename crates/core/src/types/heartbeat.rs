use alloy::primitives::U256;
use metronome_abi::IAuctions;

/// Auction state bundled by the `heartbeat()` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Heartbeat {
    /// Amount fixed at the start of the auction the contract considers current.
    pub minting: U256,
    pub total_met: U256,
    pub proceeds_bal: U256,
    pub curr_tick: U256,
    pub curr_auction: U256,
    pub next_auction_gmt: U256,
    pub genesis_gmt: U256,
    pub current_auction_price: U256,
    pub daily_mintable: U256,
    pub last_purchase_price: U256,
}

impl From<IAuctions::heartbeatReturn> for Heartbeat {
    fn from(raw: IAuctions::heartbeatReturn) -> Self {
        Self {
            minting: raw.minting,
            total_met: raw.totalMET,
            proceeds_bal: raw.proceedsBal,
            curr_tick: raw.currTick,
            curr_auction: raw.currAuction,
            next_auction_gmt: raw.nextAuctionGMT,
            genesis_gmt: raw.genesisGMT,
            current_auction_price: raw.currentAuctionPrice,
            daily_mintable: raw._dailyMintable,
            last_purchase_price: raw._lastPurchasePrice,
        }
    }
}
