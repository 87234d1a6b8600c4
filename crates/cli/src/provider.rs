use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use metronome_core::{Contracts, OnChainAuctions, OnChainConverter, ReadError, StatusClient};
use tracing::info;

use crate::config::Endpoint;

pub type ChainStatusClient =
    StatusClient<OnChainAuctions<DynProvider>, OnChainConverter<DynProvider>>;

/// Builds a client whose contracts connect on first use.
pub fn status_client(endpoint: Endpoint) -> ChainStatusClient {
    StatusClient::from_future(async move {
        info!(
            rpc_url = %endpoint.rpc_url,
            auctions = %endpoint.auctions,
            converter = %endpoint.converter,
            "connecting to chain"
        );
        let provider = ProviderBuilder::new()
            .connect(&endpoint.rpc_url)
            .await
            .map_err(ReadError::from)?
            .erased();

        Ok::<_, ReadError>(Contracts::on_chain(
            provider,
            endpoint.auctions,
            endpoint.converter,
        ))
    })
}
