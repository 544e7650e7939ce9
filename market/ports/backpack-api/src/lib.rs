use async_trait::async_trait;

use bptf::rest::{Currencies, PriceHistoryPoint};
use bptf::Result;

#[async_trait]
pub trait BackpackApi: Send + Sync + 'static {
    async fn get_currencies(&self) -> Result<Currencies>;
    async fn get_price_history(&self, item: &str, quality: &str) -> Result<Vec<PriceHistoryPoint>>;
}
