use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Error};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PriceSnapshot {
    pub key_price_in_ref: f64,
    pub ref_price_in_usd: f64,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PricePoint {
    pub timestamp: i64,
    pub value: f64,
}

/// Price series for a single listing, filtered to the requested window.
/// Points keep the upstream order, duplicates included.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PriceHistory {
    pub item: String,
    pub points: Vec<PricePoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum Timeframe {
    SevenDays,
    #[default]
    ThirtyDays,
    NinetyDays,
    OneYear,
    ThreeYears,
}

impl Timeframe {
    pub fn window(&self) -> Duration {
        match self {
            Timeframe::SevenDays => Duration::days(7),
            Timeframe::ThirtyDays => Duration::days(30),
            Timeframe::NinetyDays => Duration::days(90),
            Timeframe::OneYear => Duration::days(365),
            Timeframe::ThreeYears => Duration::days(3 * 365),
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Timeframe::SevenDays => "7days",
            Timeframe::ThirtyDays => "30days",
            Timeframe::NinetyDays => "90days",
            Timeframe::OneYear => "1year",
            Timeframe::ThreeYears => "3years",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Timeframe {
    type Err = Error;
    fn from_str(input: &str) -> Result<Timeframe, Self::Err> {
        match input {
            "7days" => Ok(Timeframe::SevenDays),
            "30days" => Ok(Timeframe::ThirtyDays),
            "90days" => Ok(Timeframe::NinetyDays),
            "1year" => Ok(Timeframe::OneYear),
            "3years" => Ok(Timeframe::ThreeYears),
            input => bail!("Unknown timeframe: {input}"),
        }
    }
}
