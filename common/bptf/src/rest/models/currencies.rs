use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::rest::models::{Request, TF2_APP_ID};

#[derive(Clone, Debug, Serialize)]
pub struct GetCurrenciesRequest {
    pub appid: u32,
}

impl Default for GetCurrenciesRequest {
    fn default() -> Self {
        Self { appid: TF2_APP_ID }
    }
}

impl Request for GetCurrenciesRequest {
    const METHOD: Method = Method::GET;
    const ENDPOINT: &'static str = "/api/IGetCurrencies/v1";
    type Response = CurrenciesPayload;
}

#[derive(Clone, Debug, Deserialize)]
pub struct CurrenciesPayload {
    pub currencies: Currencies,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Currencies {
    pub keys: CurrencyInfo,
    pub refined: CurrencyInfo,
    #[serde(rename = "USD", default)]
    pub usd: Option<CurrencyInfo>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CurrencyInfo {
    pub price: CurrencyPrice,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct CurrencyPrice {
    pub value: f64,
    #[serde(default)]
    pub value_raw: Option<f64>,
}
