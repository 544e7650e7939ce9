use async_trait::async_trait;
use thiserror::Error;

use domain_model::{PriceHistory, PriceSnapshot};

#[async_trait]
pub trait MarketApi: Send + Sync + 'static {
    async fn get_current_prices(&self) -> Result<PriceSnapshot, MarketError>;
    async fn get_price_history(
        &self,
        item: &str,
        quality: &str,
        timeframe: &str,
    ) -> Result<PriceHistory, MarketError>;
}

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("Backpack.tf API key is not configured")]
    CredentialMissing,
    #[error("Missing required parameter '{0}'")]
    MissingParameter(&'static str),
    #[error("Backpack.tf reported an error: {0}")]
    UpstreamRejected(String),
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}
