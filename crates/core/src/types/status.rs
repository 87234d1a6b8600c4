use alloy::primitives::U256;
use serde::Serialize;

use super::amount::serialize_decimal;

/// Normalized view of the `Auctions` contract.
///
/// Amounts and counters serialize as decimal strings, timestamps as integers
/// in the [`TimeUnit`](super::TimeUnit) requested by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionStatus {
    #[serde(serialize_with = "serialize_decimal")]
    pub curr_auction: U256,
    #[serde(serialize_with = "serialize_decimal")]
    pub current_auction_price: U256,
    #[serde(serialize_with = "serialize_decimal")]
    pub curr_tick: U256,
    pub daily_auction_start_time: u64,
    #[serde(serialize_with = "serialize_decimal")]
    pub daily_mintable: U256,
    pub genesis_time: u64,
    #[serde(serialize_with = "serialize_decimal")]
    pub last_purchase_price: U256,
    pub last_purchase_time: u64,
    /// Coins available in the current auction.
    #[serde(serialize_with = "serialize_decimal")]
    pub minting: U256,
    pub next_auction_time: u64,
    #[serde(serialize_with = "serialize_decimal")]
    pub proceeds_bal: U256,
    #[serde(rename = "totalMET", serialize_with = "serialize_decimal")]
    pub total_met: U256,
}

/// Normalized view of the `AutonomousConverter` contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverterStatus {
    /// Coins returned for one MET. Informational only: the actual rate
    /// depends on the amount converted and the contract balances.
    #[serde(serialize_with = "serialize_decimal")]
    pub current_converter_price: U256,
    #[serde(serialize_with = "serialize_decimal")]
    pub coin_balance: U256,
    #[serde(serialize_with = "serialize_decimal")]
    pub met_balance: U256,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn converter_status_serializes_amounts_as_strings() {
        let status = ConverterStatus {
            current_converter_price: U256::from(500_000_000_000_000_000u64),
            coin_balance: U256::from(2_000_000_000_000_000_000u64),
            met_balance: U256::from(1_000_000_000_000_000_000u64),
        };

        assert_eq!(
            serde_json::to_value(&status).unwrap(),
            json!({
                "currentConverterPrice": "500000000000000000",
                "coinBalance": "2000000000000000000",
                "metBalance": "1000000000000000000"
            })
        );
    }

    #[test]
    fn auction_status_uses_wire_field_names() {
        let status = AuctionStatus {
            curr_auction: U256::from(373u64),
            current_auction_price: U256::from(500_000_000_000_000_000u64),
            curr_tick: U256::from(545_818u64),
            daily_auction_start_time: 1_529_884_800,
            daily_mintable: U256::from(1_000_000_000_000_000_000u64),
            genesis_time: 1_529_280_060,
            last_purchase_price: U256::from(1_000_000_000_000_000_000u64),
            last_purchase_time: 1_561_943_700,
            minting: U256::from(1_000_000_000_000_000_000u64),
            next_auction_time: 1_562_112_000,
            proceeds_bal: U256::ZERO,
            total_met: U256::from(10u64).pow(U256::from(19u64)),
        };

        assert_eq!(
            serde_json::to_value(&status).unwrap(),
            json!({
                "currAuction": "373",
                "currentAuctionPrice": "500000000000000000",
                "currTick": "545818",
                "dailyAuctionStartTime": 1529884800u64,
                "dailyMintable": "1000000000000000000",
                "genesisTime": 1529280060u64,
                "lastPurchasePrice": "1000000000000000000",
                "lastPurchaseTime": 1561943700u64,
                "minting": "1000000000000000000",
                "nextAuctionTime": 1562112000u64,
                "proceedsBal": "0",
                "totalMET": "10000000000000000000"
            })
        );
    }
}
