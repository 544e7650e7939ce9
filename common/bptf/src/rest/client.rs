use std::time::Duration;

use fehler::{throw, throws};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::from_str;
use serde_urlencoded::to_string as to_ustring;
use tracing::{error, trace};
use url::Url;

use crate::error::BptfError;

use super::models::Request;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct BptfRest {
    url: String,
    client: Client,
    api_key: Option<String>,
}

impl BptfRest {
    pub fn new(url: &str) -> Self {
        BptfRest {
            url: url.to_string(),
            client: http_client(),
            api_key: None,
        }
    }

    pub fn with_key(url: &str, api_key: &str) -> Self {
        BptfRest {
            url: url.to_string(),
            client: http_client(),
            api_key: Some(api_key.to_string()),
        }
    }

    #[throws(BptfError)]
    pub async fn request<R>(&self, req: R) -> R::Response
    where
        R: Request,
        R::Response: DeserializeOwned,
    {
        let api_key = self.get_api_key()?;
        let mut url = Url::parse(&format!("{}{}", self.url, R::ENDPOINT))?;
        if R::HAS_PAYLOAD {
            url.set_query(Some(&to_ustring(&req)?));
        }
        trace!("Request url: {url:?}");
        url.query_pairs_mut().append_pair("key", api_key);

        let resp = self.client
            .request(R::METHOD, url)
            .header("user-agent", "bptf-rs")
            .send()
            .await?;
        self.handle_response(resp).await?
    }

    #[throws(BptfError)]
    fn get_api_key(&self) -> &str {
        match self.api_key.as_deref() {
            None => throw!(BptfError::NoApiKeySet),
            Some(api_key) => api_key,
        }
    }

    #[throws(BptfError)]
    async fn handle_response<T: DeserializeOwned>(&self, resp: Response) -> T {
        let payload = resp.text().await?;
        trace!("Response: {payload}");
        parse_payload(&payload)?
    }
}

fn http_client() -> Client {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("Error during http client creation")
}

/// Unwraps the backpack.tf envelope and checks its embedded success flag.
#[throws(BptfError)]
fn parse_payload<T: DeserializeOwned>(payload: &str) -> T {
    let body = match from_str::<BptfResponseEnvelope<T>>(payload) {
        Ok(envelope) => envelope.response,
        Err(err) => {
            error!("Cannot deserialize response from {payload}: {err}");
            throw!(BptfError::CannotDeserializeResponse(payload.to_string()))
        }
    };
    if body.success != 1 {
        error!("Backpack.tf API error: {payload}");
        throw!(BptfError::Api(body.message.unwrap_or_default()))
    }
    body.data
}

#[derive(Clone, Debug, Deserialize)]
struct BptfResponseEnvelope<T> {
    response: BptfResponseBody<T>,
}

#[derive(Clone, Debug, Deserialize)]
struct BptfResponseBody<T> {
    #[serde(default)]
    success: i64,
    #[serde(default)]
    message: Option<String>,
    #[serde(flatten)]
    data: T,
}

#[cfg(test)]
mod tests {
    use crate::rest::models::{GetCurrenciesRequest, PriceHistoryPayload};
    use crate::rest::CurrenciesPayload;

    use super::*;

    #[test]
    fn test_parse_successful_history_payload() {
        let payload = r#"{"response": {"success": 1, "history": [
            {"value": 56.11, "timestamp": 1600000000},
            {"value": 57.33, "timestamp": 1600086400}
        ]}}"#;

        let parsed: PriceHistoryPayload = parse_payload(payload).unwrap();
        assert_eq!(parsed.history.len(), 2);
        assert_eq!(parsed.history[0].value, 56.11);
        assert_eq!(parsed.history[1].timestamp, 1600086400);
    }

    #[test]
    fn test_parse_history_payload_without_history_field() {
        let payload = r#"{"response": {"success": 1}}"#;

        let parsed: PriceHistoryPayload = parse_payload(payload).unwrap();
        assert!(parsed.history.is_empty());
    }

    #[test]
    fn test_parse_failed_payload_carries_upstream_message() {
        let payload = r#"{"response": {"success": 0, "message": "unknown item"}}"#;

        let err = parse_payload::<PriceHistoryPayload>(payload).unwrap_err();
        match err {
            BptfError::Api(message) => assert_eq!(message, "unknown item"),
            err => panic!("Unexpected error: {err}"),
        }
    }

    #[test]
    fn test_parse_malformed_payload() {
        let payload = "<html>502 Bad Gateway</html>";

        let err = parse_payload::<CurrenciesPayload>(payload).unwrap_err();
        assert!(matches!(err, BptfError::CannotDeserializeResponse(_)));
    }

    #[test]
    fn test_parse_currencies_payload() {
        let payload = r#"{"response": {"success": 1, "currencies": {
            "keys": {"price": {"value": 57.33, "value_raw": 57.44}},
            "refined": {"price": {"value": 0.0, "value_raw": 0.03}},
            "USD": {"price": {"value": 1.82}}
        }}}"#;

        let parsed: CurrenciesPayload = parse_payload(payload).unwrap();
        assert_eq!(parsed.currencies.keys.price.value, 57.33);
        assert_eq!(parsed.currencies.refined.price.value, 0.0);
        assert_eq!(parsed.currencies.usd.unwrap().price.value, 1.82);
    }

    #[tokio::test]
    async fn test_request_without_api_key_fails_before_sending() {
        // Port 9 is closed, a request reaching the network would error differently.
        let rest = BptfRest::new("http://127.0.0.1:9");

        let err = rest.request(GetCurrenciesRequest::default()).await.unwrap_err();
        assert!(matches!(err, BptfError::NoApiKeySet));
    }
}
