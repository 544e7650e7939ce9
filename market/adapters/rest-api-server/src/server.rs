use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tracing::error;

use market_core_api::{MarketApi, MarketError};
use market_rest_api::dtos::{CurrentPricesDto, PriceHistoryDto};
use market_rest_api::endpoints::{GET_ITEMS_SEARCH, GET_PRICES, GET_PRICES_HISTORY};
use market_rest_api::path_queries::PriceHistoryQuery;

pub async fn run(port: u16, cors_origin: &str, market: impl MarketApi) {
    let market = Arc::new(market);
    let router = Router::new()
        .route(GET_PRICES, get(get_current_prices))
        .route(GET_PRICES_HISTORY, get(get_price_history))
        .route(GET_ITEMS_SEARCH, get(search_items))
        .layer(cors_layer(cors_origin))
        .with_state(market);

    let address = SocketAddr::new(IpAddr::from([0, 0, 0, 0]), port);
    axum::Server::bind(&address)
        .serve(router.into_make_service())
        .await
        .unwrap();
}

fn cors_layer(origin: &str) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin.parse::<HeaderValue>().expect("Invalid CORS origin"))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

async fn get_current_prices(
    State(market): State<Arc<dyn MarketApi>>,
) -> Result<Json<CurrentPricesDto>, (StatusCode, String)> {
    let snapshot = market.get_current_prices().await.map_err(current_prices_error)?;
    Ok(Json(snapshot.into()))
}

async fn get_price_history(
    State(market): State<Arc<dyn MarketApi>>,
    Query(query): Query<PriceHistoryQuery>,
) -> Result<Json<PriceHistoryDto>, (StatusCode, String)> {
    let history = market
        .get_price_history(&query.item, &query.quality, &query.timeframe)
        .await
        .map_err(price_history_error)?;
    Ok(Json(history.into()))
}

async fn search_items() -> Json<Value> {
    Json(json!({ "message": "Not implemented yet" }))
}

fn current_prices_error(err: MarketError) -> (StatusCode, String) {
    match err {
        MarketError::CredentialMissing => {
            error!("Error fetching prices: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Server configuration error".to_string())
        }
        // Upstream message stays in the server log for this endpoint.
        MarketError::UpstreamRejected(message) => {
            error!("Backpack.tf API error: {message}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error fetching prices".to_string())
        }
        err => {
            error!("Error fetching prices: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
        }
    }
}

fn price_history_error(err: MarketError) -> (StatusCode, String) {
    match err {
        MarketError::MissingParameter(_) => {
            (StatusCode::BAD_REQUEST, "Missing item or quality parameter".to_string())
        }
        MarketError::CredentialMissing => {
            error!("Error fetching price history: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Server configuration error".to_string())
        }
        MarketError::UpstreamRejected(message) => {
            error!("Backpack.tf price history API error: {message}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error fetching price history: {message}"),
            )
        }
        err => {
            error!("Error fetching price history: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
        }
    }
}
