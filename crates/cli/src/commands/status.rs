use eyre::Result;
use metronome_core::{AuctionsReader, ConverterReader, StatusClient, TimeUnit};

pub async fn auction<A, C>(client: &StatusClient<A, C>, unit: TimeUnit) -> Result<String>
where
    A: AuctionsReader + 'static,
    C: ConverterReader + 'static,
{
    let status = client.auction_status(unit).await?;
    Ok(serde_json::to_string_pretty(&status)?)
}

pub async fn converter<A, C>(client: &StatusClient<A, C>) -> Result<String>
where
    A: AuctionsReader + 'static,
    C: ConverterReader + 'static,
{
    let status = client.converter_status().await?;
    Ok(serde_json::to_string_pretty(&status)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::U256;
    use async_trait::async_trait;
    use metronome_core::{Contracts, Heartbeat, ReadError};

    struct Auctions;

    #[async_trait]
    impl AuctionsReader for Auctions {
        async fn daily_auction_start_time(&self) -> Result<U256, ReadError> {
            Ok(U256::from(1_529_884_800u64))
        }

        async fn heartbeat(&self) -> Result<Heartbeat, ReadError> {
            Ok(Heartbeat {
                curr_auction: U256::from(373u64),
                genesis_gmt: U256::from(1_529_280_060u64),
                next_auction_gmt: U256::from(1_562_112_000u64),
                ..Default::default()
            })
        }

        async fn last_purchase_tick(&self) -> Result<U256, ReadError> {
            Ok(U256::from(545_834u64))
        }

        async fn mintable(&self) -> Result<U256, ReadError> {
            Ok(U256::ZERO)
        }
    }

    struct Converter;

    #[async_trait]
    impl ConverterReader for Converter {
        async fn eth_for_met(&self, _amount: U256) -> Result<U256, ReadError> {
            Ok(U256::from(500_000_000_000_000_000u64))
        }

        async fn eth_balance(&self) -> Result<U256, ReadError> {
            Ok(U256::from(2_000_000_000_000_000_000u64))
        }

        async fn met_balance(&self) -> Result<U256, ReadError> {
            Ok(U256::from(1_000_000_000_000_000_000u64))
        }
    }

    fn client() -> StatusClient<Auctions, Converter> {
        StatusClient::new(Contracts::new(Auctions, Converter))
    }

    #[tokio::test]
    async fn renders_auction_status_in_milliseconds() {
        let output = auction(&client(), TimeUnit::Milliseconds).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["currAuction"], "373");
        assert_eq!(json["minting"], "0");
        assert_eq!(json["lastPurchaseTime"], 1_562_030_100_000u64);
        assert_eq!(json["genesisTime"], 1_529_280_060_000u64);
    }

    #[tokio::test]
    async fn renders_converter_status() {
        let output = converter(&client()).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "currentConverterPrice": "500000000000000000",
                "coinBalance": "2000000000000000000",
                "metBalance": "1000000000000000000"
            })
        );
    }
}
