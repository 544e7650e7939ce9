use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use domain_model::{PriceHistory, PricePoint, PriceSnapshot};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentPricesDto {
    pub key_price_in_ref: f64,
    #[serde(rename = "refPriceInUSD")]
    pub ref_price_in_usd: f64,
    pub last_updated: String,
}

impl From<PriceSnapshot> for CurrentPricesDto {
    fn from(value: PriceSnapshot) -> Self {
        Self {
            key_price_in_ref: value.key_price_in_ref,
            ref_price_in_usd: value.ref_price_in_usd,
            last_updated: value.last_updated.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PriceHistoryDto {
    pub item: String,
    pub points: Vec<PricePointDto>,
}

impl From<PriceHistory> for PriceHistoryDto {
    fn from(value: PriceHistory) -> Self {
        Self {
            item: value.item,
            points: value.points.into_iter().map(PricePointDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct PricePointDto {
    pub timestamp: i64,
    pub value: f64,
}

impl From<PricePoint> for PricePointDto {
    fn from(value: PricePoint) -> Self {
        Self {
            timestamp: value.timestamp,
            value: value.value,
        }
    }
}
