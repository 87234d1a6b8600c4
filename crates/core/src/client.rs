use std::{future::Future, sync::Arc};

use futures::{
    FutureExt,
    future::{BoxFuture, Shared},
    try_join,
};
use tracing::debug;

use crate::{
    contracts::{AuctionsReader, Contracts, ConverterReader},
    derivation::AuctionReads,
    error::{Error, ReadError},
    types::{
        amount::ONE_MET,
        status::{AuctionStatus, ConverterStatus},
        time::TimeUnit,
    },
};

type SharedContracts<A, C> =
    Shared<BoxFuture<'static, Result<Arc<Contracts<A, C>>, Arc<ReadError>>>>;

/// Queries the `Auctions` and `AutonomousConverter` contracts and normalizes
/// their raw values into status records.
///
/// The contracts may be handed over ready or as a future; either way they are
/// resolved once and shared by every later call. Reads themselves are never
/// cached.
pub struct StatusClient<A, C> {
    contracts: SharedContracts<A, C>,
}

impl<A, C> Clone for StatusClient<A, C> {
    fn clone(&self) -> Self {
        Self {
            contracts: self.contracts.clone(),
        }
    }
}

impl<A, C> StatusClient<A, C>
where
    A: AuctionsReader + 'static,
    C: ConverterReader + 'static,
{
    pub fn new(contracts: Contracts<A, C>) -> Self {
        Self::from_future(async move { Ok::<_, ReadError>(contracts) })
    }

    pub fn from_future<F>(contracts: F) -> Self
    where
        F: Future<Output = Result<Contracts<A, C>, ReadError>> + Send + 'static,
    {
        let contracts = contracts
            .map(|resolved| resolved.map(Arc::new).map_err(Arc::new))
            .boxed()
            .shared();
        Self { contracts }
    }

    async fn contracts(&self) -> Result<Arc<Contracts<A, C>>, Error> {
        self.contracts.clone().await.map_err(Error::Provider)
    }

    pub async fn auction_status(&self, unit: TimeUnit) -> Result<AuctionStatus, Error> {
        let contracts = self.contracts().await?;
        let auctions = &contracts.auctions;

        let (daily_auction_start_time, heartbeat, last_purchase_tick, mintable) = try_join!(
            auctions.daily_auction_start_time(),
            auctions.heartbeat(),
            auctions.last_purchase_tick(),
            auctions.mintable(),
        )?;

        debug!(
            %daily_auction_start_time,
            %last_purchase_tick,
            %mintable,
            ?heartbeat,
            "fetched auction reads"
        );

        let reads = AuctionReads {
            daily_auction_start_time,
            heartbeat,
            last_purchase_tick,
            mintable,
        };

        Ok(AuctionStatus::derive(reads, unit)?)
    }

    pub async fn converter_status(&self) -> Result<ConverterStatus, Error> {
        let contracts = self.contracts().await?;
        let converter = &contracts.converter;

        let (current_converter_price, coin_balance, met_balance) = try_join!(
            converter.eth_for_met(ONE_MET),
            converter.eth_balance(),
            converter.met_balance(),
        )?;

        debug!(
            %current_converter_price,
            %coin_balance,
            %met_balance,
            "fetched converter reads"
        );

        Ok(ConverterStatus {
            current_converter_price,
            coin_balance,
            met_balance,
        })
    }
}

impl<A, C> From<Contracts<A, C>> for StatusClient<A, C>
where
    A: AuctionsReader + 'static,
    C: ConverterReader + 'static,
{
    fn from(contracts: Contracts<A, C>) -> Self {
        Self::new(contracts)
    }
}
