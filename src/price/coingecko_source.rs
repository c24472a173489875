use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::price::PriceSource;
use crate::price::fetch_error::FetchError;
use crate::types::price_reading::PriceReading;

pub const COINGECKO_URL: &str = "https://api.coingecko.com/api/v3";
pub const DEFAULT_ASSET_ID: &str = "ripple";

/// Fields are optional so that a missing quote is reported by name rather than
/// as a generic json error.
#[derive(Debug, Deserialize)]
struct SimplePriceQuote {
    usd: Option<f64>,
    eur: Option<f64>,
    usd_24h_change: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct CoinGeckoSource {
    http: reqwest::Client,
    endpoint: Url,
    asset_id: String,
}

impl CoinGeckoSource {
    pub fn with_url(base_url: &str, asset_id: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build price feed http client")?;

        let mut endpoint = Url::parse(&format!(
            "{}/simple/price",
            base_url.trim_end_matches('/')
        ))
        .with_context(|| format!("invalid price feed url {base_url}"))?;

        endpoint
            .query_pairs_mut()
            .append_pair("ids", asset_id)
            .append_pair("vs_currencies", "usd,eur")
            .append_pair("include_24hr_change", "true");

        Ok(Self {
            http,
            endpoint,
            asset_id: asset_id.to_string(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn parse_body(asset_id: &str, body: &str) -> Result<PriceReading, FetchError> {
        if body.trim().is_empty() {
            return Err(FetchError::EmptyBody);
        }

        let mut quotes: HashMap<String, SimplePriceQuote> = serde_json::from_str(body)?;

        let quote = quotes
            .remove(asset_id)
            .ok_or_else(|| FetchError::MissingAsset {
                asset: asset_id.to_string(),
            })?;

        let missing = |field: &'static str| FetchError::MissingField {
            asset: asset_id.to_string(),
            field,
        };

        Ok(PriceReading::new(
            quote.usd.ok_or_else(|| missing("usd"))?,
            quote.eur.ok_or_else(|| missing("eur"))?,
            quote.usd_24h_change.ok_or_else(|| missing("usd_24h_change"))?,
        ))
    }
}

#[async_trait]
impl PriceSource for CoinGeckoSource {
    async fn fetch(&self) -> Result<PriceReading, FetchError> {
        tracing::debug!(url = %self.endpoint, "fetching price");

        let response = self.http.get(self.endpoint.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        let body = response.text().await?;

        Self::parse_body(&self.asset_id, &body)
    }
}
