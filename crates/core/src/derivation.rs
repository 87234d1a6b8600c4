//! Turns raw `Auctions` reads into an [`AuctionStatus`].
//!
//! Ticks are minutes elapsed since the genesis instant. Auction numbering
//! starts `ISA_TICKS` ticks after genesis, once the initial supply auction
//! closes, and advances once per day.

use alloy::primitives::U256;
use tracing::debug;

use crate::{
    error::DerivationError,
    types::{
        heartbeat::Heartbeat,
        status::AuctionStatus,
        time::{SECONDS_PER_MINUTE, TimeUnit},
    },
};

/// Ticks from genesis to the start of daily auction 1.
pub const ISA_TICKS: i128 = 10_079;
pub const MINUTES_PER_DAY: i128 = 1_440;

/// The four independent reads a status is derived from.
#[derive(Debug, Clone)]
pub struct AuctionReads {
    pub daily_auction_start_time: U256,
    pub heartbeat: Heartbeat,
    pub last_purchase_tick: U256,
    pub mintable: U256,
}

/// Auction number implied by a purchase made at `last_purchase_tick`.
///
/// Uses floor division: purchases before the first daily auction map to
/// zero or negative auction numbers.
pub fn expected_auction(last_purchase_tick: u64) -> i128 {
    (i128::from(last_purchase_tick) - ISA_TICKS).div_euclid(MINUTES_PER_DAY) + 1
}

/// Whether the contract already moved on to an auction with no purchase yet.
pub fn is_next_auction(last_purchase_tick: u64, curr_auction: U256) -> bool {
    let expected = expected_auction(last_purchase_tick);
    match u64::try_from(expected) {
        Ok(expected) => curr_auction != U256::from(expected),
        Err(_) => true,
    }
}

/// Picks the amount still available in the current auction.
///
/// `mintable` is only refreshed by purchases, so it goes stale as soon as a
/// new auction starts. Until the first purchase of that auction the
/// heartbeat's `minting` is the accurate figure.
pub fn effective_minting(heartbeat: &Heartbeat, mintable: U256, last_purchase_tick: u64) -> U256 {
    if is_next_auction(last_purchase_tick, heartbeat.curr_auction) {
        heartbeat.minting
    } else {
        mintable
    }
}

/// Wall-clock second of the last purchase.
pub fn last_purchase_time(genesis: u64, last_purchase_tick: u64) -> Result<u64, DerivationError> {
    last_purchase_tick
        .checked_mul(SECONDS_PER_MINUTE)
        .and_then(|elapsed| elapsed.checked_add(genesis))
        .ok_or(DerivationError::Overflow {
            field: "lastPurchaseTime",
        })
}

fn to_u64(field: &'static str, value: U256) -> Result<u64, DerivationError> {
    u64::try_from(value).map_err(|_| DerivationError::OutOfRange { field, value })
}

impl AuctionStatus {
    pub fn derive(reads: AuctionReads, unit: TimeUnit) -> Result<Self, DerivationError> {
        let AuctionReads {
            daily_auction_start_time,
            heartbeat,
            last_purchase_tick,
            mintable,
        } = reads;

        let tick = to_u64("lastPurchaseTick", last_purchase_tick)?;
        let genesis = to_u64("genesisGMT", heartbeat.genesis_gmt)?;
        let daily_start = to_u64("dailyAuctionStartTime", daily_auction_start_time)?;
        let next_auction = to_u64("nextAuctionGMT", heartbeat.next_auction_gmt)?;
        let last_purchase = last_purchase_time(genesis, tick)?;

        let next_auction_started = is_next_auction(tick, heartbeat.curr_auction);
        debug!(
            last_purchase_tick = tick,
            curr_auction = %heartbeat.curr_auction,
            next_auction_started,
            "derived auction rollover"
        );
        let minting = effective_minting(&heartbeat, mintable, tick);

        Ok(Self {
            curr_auction: heartbeat.curr_auction,
            current_auction_price: heartbeat.current_auction_price,
            curr_tick: heartbeat.curr_tick,
            daily_auction_start_time: unit.apply("dailyAuctionStartTime", daily_start)?,
            daily_mintable: heartbeat.daily_mintable,
            genesis_time: unit.apply("genesisTime", genesis)?,
            last_purchase_price: heartbeat.last_purchase_price,
            last_purchase_time: unit.apply("lastPurchaseTime", last_purchase)?,
            minting,
            next_auction_time: unit.apply("nextAuctionTime", next_auction)?,
            proceeds_bal: heartbeat.proceeds_bal,
            total_met: heartbeat.total_met,
        })
    }
}
