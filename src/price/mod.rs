pub mod coingecko_source;
pub mod fetch_error;

use async_trait::async_trait;

use crate::price::fetch_error::FetchError;
use crate::types::price_reading::PriceReading;

#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Performs exactly one request against the feed. No retries, no caching.
    async fn fetch(&self) -> Result<PriceReading, FetchError>;
}
