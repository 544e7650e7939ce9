use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::rest::models::{Request, TF2_APP_ID};

#[derive(Clone, Debug, Serialize)]
pub struct PriceHistoryRequest {
    pub item: String,
    pub quality: String,
    pub appid: u32,
}

impl PriceHistoryRequest {
    pub fn new(item: &str, quality: &str) -> Self {
        Self {
            item: item.to_string(),
            quality: quality.to_string(),
            appid: TF2_APP_ID,
        }
    }
}

impl Request for PriceHistoryRequest {
    const METHOD: Method = Method::GET;
    const ENDPOINT: &'static str = "/api/IGetPriceHistory/v1";
    type Response = PriceHistoryPayload;
}

#[derive(Clone, Debug, Deserialize)]
pub struct PriceHistoryPayload {
    #[serde(default)]
    pub history: Vec<PriceHistoryPoint>,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct PriceHistoryPoint {
    pub timestamp: i64,
    pub value: f64,
}
