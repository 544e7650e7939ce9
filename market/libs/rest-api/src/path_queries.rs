use serde::{Deserialize, Serialize};
use serde_inline_default::serde_inline_default;

#[serde_inline_default]
#[derive(Debug, Deserialize, Serialize)]
pub struct PriceHistoryQuery {
    #[serde(default)]
    pub item: String,
    #[serde(default)]
    pub quality: String,
    #[serde_inline_default("30days".to_string())]
    pub timeframe: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeframe_defaults_to_30_days() {
        let query: PriceHistoryQuery =
            serde_urlencoded::from_str("item=Mann%20Co.%20Supply%20Crate%20Key&quality=Unique")
                .unwrap();

        assert_eq!(query.item, "Mann Co. Supply Crate Key");
        assert_eq!(query.quality, "Unique");
        assert_eq!(query.timeframe, "30days");
    }

    #[test]
    fn test_explicit_timeframe_is_kept_verbatim() {
        let query: PriceHistoryQuery =
            serde_urlencoded::from_str("item=Key&quality=Unique&timeframe=1week").unwrap();

        assert_eq!(query.timeframe, "1week");
    }

    #[test]
    fn test_missing_parameters_default_to_empty() {
        let query: PriceHistoryQuery = serde_urlencoded::from_str("quality=Unique").unwrap();

        assert_eq!(query.item, "");
        assert_eq!(query.quality, "Unique");
    }
}
