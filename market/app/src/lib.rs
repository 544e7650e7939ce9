use std::sync::Arc;

use tracing::{info, warn};

use market_backpack_client::BackpackClient;
use market_config::CONFIG;
use market_core::Market;

pub async fn run() {
    info!("▶ market running...");
    let api_key = CONFIG.backpack.auth.key();
    if api_key.is_none() {
        warn!("Backpack.tf API key is not configured, price requests will fail");
    }
    let backpack_client = Arc::new(BackpackClient::new(&CONFIG.backpack.http.url, api_key));
    let market = Market::new(backpack_client);
    market_rest_api_server::run(CONFIG.application.port, &CONFIG.cors.origin, market).await;
}
