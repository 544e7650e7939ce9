use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use bptf::BptfError;
use domain_model::{PriceHistory, PricePoint, PriceSnapshot, Timeframe};
use market_backpack_api::BackpackApi;
use market_core_api::{MarketApi, MarketError};

pub struct Market<B: BackpackApi> {
    backpack: Arc<B>,
}

impl<B: BackpackApi> Market<B> {
    pub fn new(backpack: Arc<B>) -> Self {
        Self { backpack }
    }
}

#[async_trait]
impl<B: BackpackApi> MarketApi for Market<B> {
    async fn get_current_prices(&self) -> Result<PriceSnapshot, MarketError> {
        let currencies = self.backpack.get_currencies().await.map_err(convert_error)?;
        Ok(PriceSnapshot {
            key_price_in_ref: currencies.keys.price.value,
            ref_price_in_usd: currencies.refined.price.value,
            last_updated: Utc::now(),
        })
    }

    async fn get_price_history(
        &self,
        item: &str,
        quality: &str,
        timeframe: &str,
    ) -> Result<PriceHistory, MarketError> {
        if item.is_empty() {
            return Err(MarketError::MissingParameter("item"));
        }
        if quality.is_empty() {
            return Err(MarketError::MissingParameter("quality"));
        }

        // An unrecognized timeframe keeps the whole series.
        let cutoff = timeframe.parse::<Timeframe>()
            .map(|timeframe| (Utc::now() - timeframe.window()).timestamp())
            .unwrap_or(0);
        debug!("History query for item: '{item}', quality: '{quality}', cutoff: {cutoff}");

        let history = self.backpack.get_price_history(item, quality).await.map_err(convert_error)?;
        let points = history.into_iter()
            .filter(|point| point.timestamp >= cutoff)
            .map(|point| PricePoint {
                timestamp: point.timestamp,
                value: point.value,
            })
            .collect();

        Ok(PriceHistory {
            item: item.to_string(),
            points,
        })
    }
}

fn convert_error(err: BptfError) -> MarketError {
    match err {
        BptfError::NoApiKeySet => MarketError::CredentialMissing,
        BptfError::Api(message) => MarketError::UpstreamRejected(message),
        err => MarketError::Upstream(err.into()),
    }
}
