use async_trait::async_trait;

use bptf::rest::{
    BptfRest, Currencies, GetCurrenciesRequest, PriceHistoryPoint, PriceHistoryRequest,
};
use bptf::Result;
use market_backpack_api::BackpackApi;

pub struct BackpackClient {
    rest: BptfRest,
}

impl BackpackClient {
    pub fn new(url: &str, api_key: Option<&str>) -> Self {
        let rest = match api_key {
            Some(api_key) => BptfRest::with_key(url, api_key),
            None => BptfRest::new(url),
        };
        Self { rest }
    }
}

#[async_trait]
impl BackpackApi for BackpackClient {
    async fn get_currencies(&self) -> Result<Currencies> {
        let payload = self.rest.request(GetCurrenciesRequest::default()).await?;
        Ok(payload.currencies)
    }

    async fn get_price_history(&self, item: &str, quality: &str) -> Result<Vec<PriceHistoryPoint>> {
        let payload = self.rest.request(PriceHistoryRequest::new(item, quality)).await?;
        Ok(payload.history)
    }
}
