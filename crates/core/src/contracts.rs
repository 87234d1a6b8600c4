use alloy::{
    primitives::{Address, U256},
    providers::Provider,
};
use async_trait::async_trait;
use metronome_abi::{IAuctions, IAutonomousConverter};

use crate::{error::ReadError, types::heartbeat::Heartbeat};

/// Read access to the `Auctions` contract.
#[async_trait]
pub trait AuctionsReader: Send + Sync {
    async fn daily_auction_start_time(&self) -> Result<U256, ReadError>;

    async fn heartbeat(&self) -> Result<Heartbeat, ReadError>;

    async fn last_purchase_tick(&self) -> Result<U256, ReadError>;

    async fn mintable(&self) -> Result<U256, ReadError>;
}

/// Read access to the `AutonomousConverter` contract.
#[async_trait]
pub trait ConverterReader: Send + Sync {
    /// Coins returned when converting `amount` MET base units.
    async fn eth_for_met(&self, amount: U256) -> Result<U256, ReadError>;

    async fn eth_balance(&self) -> Result<U256, ReadError>;

    async fn met_balance(&self) -> Result<U256, ReadError>;
}

#[derive(Debug, Clone)]
pub struct Contracts<A, C> {
    pub auctions: A,
    pub converter: C,
}

impl<A, C> Contracts<A, C> {
    pub fn new(auctions: A, converter: C) -> Self {
        Self {
            auctions,
            converter,
        }
    }
}

impl<P> Contracts<OnChainAuctions<P>, OnChainConverter<P>>
where
    P: Provider + Clone,
{
    pub fn on_chain(provider: P, auctions: Address, converter: Address) -> Self {
        Self::new(
            OnChainAuctions::new(auctions, provider.clone()),
            OnChainConverter::new(converter, provider),
        )
    }
}

pub struct OnChainAuctions<P>
where
    P: Provider,
{
    instance: IAuctions::IAuctionsInstance<P>,
}

impl<P> OnChainAuctions<P>
where
    P: Provider,
{
    pub fn new(address: Address, provider: P) -> Self {
        Self {
            instance: IAuctions::new(address, provider),
        }
    }

    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}

#[async_trait]
impl<P> AuctionsReader for OnChainAuctions<P>
where
    P: Provider,
{
    async fn daily_auction_start_time(&self) -> Result<U256, ReadError> {
        Ok(self.instance.dailyAuctionStartTime().call().await?)
    }

    async fn heartbeat(&self) -> Result<Heartbeat, ReadError> {
        let raw = self.instance.heartbeat().call().await?;
        Ok(raw.into())
    }

    async fn last_purchase_tick(&self) -> Result<U256, ReadError> {
        Ok(self.instance.lastPurchaseTick().call().await?)
    }

    async fn mintable(&self) -> Result<U256, ReadError> {
        Ok(self.instance.mintable().call().await?)
    }
}

pub struct OnChainConverter<P>
where
    P: Provider,
{
    instance: IAutonomousConverter::IAutonomousConverterInstance<P>,
}

impl<P> OnChainConverter<P>
where
    P: Provider,
{
    pub fn new(address: Address, provider: P) -> Self {
        Self {
            instance: IAutonomousConverter::new(address, provider),
        }
    }

    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}

#[async_trait]
impl<P> ConverterReader for OnChainConverter<P>
where
    P: Provider,
{
    async fn eth_for_met(&self, amount: U256) -> Result<U256, ReadError> {
        Ok(self.instance.getEthForMetResult(amount).call().await?)
    }

    async fn eth_balance(&self) -> Result<U256, ReadError> {
        Ok(self.instance.getEthBalance().call().await?)
    }

    async fn met_balance(&self) -> Result<U256, ReadError> {
        Ok(self.instance.getMetBalance().call().await?)
    }
}
